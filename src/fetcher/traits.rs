use crate::model::FetchError;

/// Source of raw daily chart payloads for a symbol.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, symbol: &str, range: &str, interval: &str) -> Result<String, FetchError>;
}
