mod analyzer;
mod config;
mod fetcher;
mod model;
mod monitor;
mod notifier;
mod parser;
mod storage;
mod tracker;
#[cfg(test)]
mod test_support;

use config::{load_config, DEFAULT_CONFIG_PATH};
use fetcher::YahooPriceSource;
use monitor::{run_once, RunOutcome};
use notifier::SendGridNotifier;
use std::path::PathBuf;
use std::process::ExitCode;
use storage::StateFile;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::var("MA20_WATCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match YahooPriceSource::new() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to create price source: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let notifier = match SendGridNotifier::new(config.email.clone()) {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to create email notifier: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let store = StateFile::new(&config.state_file);

    info!("🚀 Checking {} against its 20-day moving average", config.symbol);
    match run_once(&config, &source, &notifier, &store).await {
        Ok(RunOutcome::Skipped(e)) => {
            warn!("No price data this run: {}", e);
        }
        Ok(RunOutcome::Checked { sample, decision, delivery }) => {
            info!(
                "Close {:.2} vs MA20 {:.2} on {}",
                sample.current_price, sample.moving_average, sample.as_of
            );
            match delivery {
                Some(Ok(())) => info!("Alert delivered"),
                Some(Err(e)) => warn!("Alert not delivered: {}", e),
                None => info!("No alert due"),
            }
            info!("Breach state now {:?}", decision.next.below_price);
        }
        Err(e) => {
            error!("State update failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
