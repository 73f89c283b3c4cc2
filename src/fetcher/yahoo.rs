use crate::fetcher::traits::PriceSource;
use crate::model::FetchError;

use reqwest::Client;
use std::time::Duration;
use tracing::info;

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

pub struct YahooPriceSource {
    client: Client,
    base_url: String,
}

impl YahooPriceSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Ma20Watch/0.1")
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: CHART_BASE_URL.to_string(),
        })
    }

    fn build_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), symbol)
    }
}

#[async_trait::async_trait]
impl PriceSource for YahooPriceSource {
    async fn fetch(&self, symbol: &str, range: &str, interval: &str) -> Result<String, FetchError> {
        let url = self.build_url(symbol);
        info!("GET {} range={} interval={}", url, range, interval);

        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        // Yahoo reports unknown symbols as 404 with a chart.error body.
        if status.as_u16() == 404 && body.contains("\"chart\"") {
            return Ok(body);
        }
        if !status.is_success() {
            return Err(FetchError::Http(format!("status {}", status)));
        }

        Ok(body)
    }
}
