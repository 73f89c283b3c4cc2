use crate::analyzer::derive_sample;
use crate::config::AppConfig;
use crate::fetcher::{PriceSource, LOOKBACK_RANGE, SAMPLE_INTERVAL};
use crate::model::{Decision, FetchError, NotifyError, PriceSample, StorageError};
use crate::notifier::{EmailMessage, Notifier};
use crate::parser::parse_chart;
use crate::storage::StateFile;
use crate::tracker::evaluate;
use tracing::info;

/// What a single run did.
#[derive(Debug)]
pub enum RunOutcome {
    /// No usable price data; state left untouched.
    Skipped(FetchError),
    Checked {
        sample: PriceSample,
        decision: Decision,
        /// `None` when no alert was due.
        delivery: Option<Result<(), NotifyError>>,
    },
}

/// Fetches prices, evaluates the breach state, sends at most one email and
/// persists the new state. Only a failed state write is an error.
pub async fn run_once(
    config: &AppConfig,
    source: &dyn PriceSource,
    notifier: &dyn Notifier,
    store: &StateFile,
) -> Result<RunOutcome, StorageError> {
    info!("Fetching prices for {}...", config.symbol);
    let sample = match fetch_sample(config, source).await {
        Ok(s) => s,
        Err(e) => return Ok(RunOutcome::Skipped(e)),
    };
    info!(
        "{} close {:.2} / MA20 {:.2} ({})",
        config.symbol, sample.current_price, sample.moving_average, sample.as_of
    );

    let prior = store.load();
    info!("Prior breach price: {:?}", prior.below_price);
    let decision = evaluate(&sample, prior);

    let delivery = match &decision.alert {
        Some(alert) => {
            let message = EmailMessage::for_alert(&config.alert_label, alert);
            info!("Alert due: {}", message.subject);
            Some(notifier.send(&message).await)
        }
        None => None,
    };

    store.save(decision.next)?;
    info!("Saved breach price {:?} to {}", decision.next.below_price, store.path().display());

    Ok(RunOutcome::Checked {
        sample,
        decision,
        delivery,
    })
}

async fn fetch_sample(config: &AppConfig, source: &dyn PriceSource) -> Result<PriceSample, FetchError> {
    let body = source
        .fetch(&config.symbol, LOOKBACK_RANGE, SAMPLE_INTERVAL)
        .await?;
    let bars = parse_chart(&body)?;
    info!("Received {} daily bars", bars.len());
    derive_sample(&bars)
}
