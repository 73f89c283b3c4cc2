// Yahoo Finance chart payload parsing
use crate::model::{DailyBar, FetchError};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<Meta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    /// Exchange offset from UTC in seconds.
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// Turns a chart response body into time-ordered daily bars.
pub fn parse_chart(body: &str) -> Result<Vec<DailyBar>, FetchError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if let Some(err) = envelope.chart.error {
        return Err(FetchError::Provider(format!("{}: {}", err.code, err.description)));
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or(FetchError::NoData)?;

    if result.timestamp.is_empty() {
        return Err(FetchError::NoData);
    }

    let closes = result
        .indicators
        .and_then(|ind| ind.quote.into_iter().next())
        .and_then(|q| q.close)
        .ok_or(FetchError::MissingField("close"))?;

    if closes.len() != result.timestamp.len() {
        return Err(FetchError::Parse(format!(
            "{} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        )));
    }

    // Bars are dated in the exchange's local time, not UTC.
    let offset = result.meta.and_then(|m| m.gmtoffset).unwrap_or(0);

    let mut bars = Vec::with_capacity(closes.len());
    for (ts, close) in result.timestamp.into_iter().zip(closes) {
        let date = DateTime::from_timestamp(ts + offset, 0)
            .ok_or_else(|| FetchError::Parse(format!("invalid timestamp {}", ts)))?
            .date_naive();
        bars.push(DailyBar {
            date,
            close: close.filter(|c| c.is_finite()),
        });
    }

    bars.sort_by_key(|b| b.date);
    Ok(bars)
}
