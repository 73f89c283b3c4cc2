pub mod traits;
pub mod yahoo;

pub use traits::PriceSource;
pub use yahoo::YahooPriceSource;

/// Calendar lookback requested from the provider.
pub const LOOKBACK_RANGE: &str = "30d";
/// Sampling interval requested from the provider.
pub const SAMPLE_INTERVAL: &str = "1d";
