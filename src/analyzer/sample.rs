use crate::analyzer::moving_average::{trailing_mean, MA_WINDOW};
use crate::model::{DailyBar, FetchError, PriceSample};

/// Derives the current price and the 20-day average from time-ordered bars.
/// Bars without a close (e.g. today's bar before the open) are skipped.
pub fn derive_sample(bars: &[DailyBar]) -> Result<PriceSample, FetchError> {
    if bars.is_empty() {
        return Err(FetchError::NoData);
    }

    let valid: Vec<(&DailyBar, f64)> = bars
        .iter()
        .filter_map(|b| b.close.map(|c| (b, c)))
        .collect();
    let closes: Vec<f64> = valid.iter().map(|&(_, c)| c).collect();

    let moving_average =
        trailing_mean(&closes, MA_WINDOW).ok_or(FetchError::InsufficientHistory {
            available: closes.len(),
            required: MA_WINDOW,
        })?;
    let (last, current_price) = valid.last().copied().ok_or(FetchError::NoData)?;

    Ok(PriceSample {
        current_price,
        moving_average,
        as_of: last.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn bars(closes: &[Option<f64>]) -> Vec<DailyBar> {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| DailyBar {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                close: *c,
            })
            .collect()
    }

    #[test]
    fn current_price_is_latest_close() {
        let mut closes = vec![Some(100.0); 21];
        closes.push(Some(78.0));
        let sample = derive_sample(&bars(&closes)).unwrap();

        assert_eq!(sample.current_price, 78.0);
        assert!((sample.moving_average - 98.9).abs() < 1e-9);
        assert_eq!(sample.as_of, NaiveDate::from_ymd_opt(2025, 9, 22).unwrap());
    }

    #[test]
    fn exactly_twenty_closes_are_enough() {
        let mut closes = vec![Some(100.0); 19];
        closes.push(Some(80.0));
        let sample = derive_sample(&bars(&closes)).unwrap();

        assert_eq!(sample.current_price, 80.0);
        assert!((sample.moving_average - 99.0).abs() < 1e-9);
    }

    #[test]
    fn nineteen_closes_are_not_enough() {
        let err = derive_sample(&bars(&vec![Some(10.0); 19])).unwrap_err();
        assert!(matches!(
            err,
            FetchError::InsufficientHistory { available: 19, required: 20 }
        ));
    }

    #[test]
    fn trailing_bar_without_close_is_skipped() {
        let mut closes = vec![Some(100.0); 23];
        closes.push(Some(90.0));
        closes.push(None);
        let sample = derive_sample(&bars(&closes)).unwrap();

        assert_eq!(sample.current_price, 90.0);
        assert!((sample.moving_average - 99.5).abs() < 1e-9);
        // dated by the last bar that has a close
        assert_eq!(sample.as_of, NaiveDate::from_ymd_opt(2025, 9, 24).unwrap());
    }

    #[test]
    fn gap_inside_window_is_skipped() {
        let mut closes: Vec<Option<f64>> = (1..=25).map(|v| Some(v as f64)).collect();
        closes[15] = None;
        let sample = derive_sample(&bars(&closes)).unwrap();

        // valid closes 1..=15, 17..=25; the last 20 are 5..=15 and 17..=25
        let expected = ((5..=15).sum::<i32>() + (17..=25).sum::<i32>()) as f64 / 20.0;
        assert_eq!(sample.current_price, 25.0);
        assert!((sample.moving_average - expected).abs() < 1e-9);
    }

    #[test]
    fn available_counts_every_valid_close() {
        let mut closes = vec![Some(10.0); 18];
        closes[3] = None;
        closes.push(None);
        assert!(matches!(
            derive_sample(&bars(&closes)),
            Err(FetchError::InsufficientHistory { available: 17, required: 20 })
        ));
    }

    #[test]
    fn no_bars_is_no_data() {
        assert!(matches!(derive_sample(&[]), Err(FetchError::NoData)));
    }
}
