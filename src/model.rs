// Core structs: DailyBar, PriceSample, BreachState, Alert and the error enums
use chrono::NaiveDate;
use thiserror::Error;

/// One row of the provider's daily table. `close` is `None` when the provider
/// returned null or a non-finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub current_price: f64,
    pub moving_average: f64,
    pub as_of: NaiveDate,
}

/// Price at which the current breach of the moving average was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BreachState {
    pub below_price: Option<f64>,
}

impl BreachState {
    pub fn absent() -> Self {
        Self { below_price: None }
    }

    pub fn at(price: f64) -> Self {
        Self {
            below_price: Some(price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTier {
    FivePercent,
    TenPercent,
}

impl DropTier {
    pub fn threshold_pct(self) -> f64 {
        match self {
            DropTier::FivePercent => 5.0,
            DropTier::TenPercent => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alert {
    Breakdown {
        price: f64,
        moving_average: f64,
    },
    Drop {
        tier: DropTier,
        price: f64,
        anchor: f64,
        drop_pct: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub alert: Option<Alert>,
    pub next: BreachState,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("provider returned no rows")]
    NoData,
    #[error("provider payload is missing field `{0}`")]
    MissingField(&'static str),
    #[error("not enough history for the moving average: {available} of {required} closes")]
    InsufficientHistory { available: usize, required: usize },
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("missing setting {0}")]
    MissingSetting(&'static str),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("rejected by provider [{status}]: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}
