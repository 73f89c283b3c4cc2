use crate::model::{Alert, DropTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// Builds the subject and plain-text body for an alert.
    pub fn for_alert(label: &str, alert: &Alert) -> Self {
        match *alert {
            Alert::Breakdown {
                price,
                moving_average,
            } => Self {
                subject: format!("[{} Alert] Fell below 20-day moving average", label),
                body: format!(
                    "Current price {:.2} has fallen below the 20-day moving average {:.2}.",
                    price, moving_average
                ),
            },
            Alert::Drop {
                tier,
                price,
                anchor,
                drop_pct,
            } => {
                let step = match tier {
                    DropTier::FivePercent => 5,
                    DropTier::TenPercent => 10,
                };
                Self {
                    subject: format!("[{} Alert] Down a further {}% since breakdown", label, step),
                    body: format!(
                        "Current price {:.2} is down {:.2}% from the breakdown price {:.2}.",
                        price, drop_pct, anchor
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_message() {
        let msg = EmailMessage::for_alert(
            "TSMC",
            &Alert::Breakdown {
                price: 95.0,
                moving_average: 100.0,
            },
        );
        assert_eq!(msg.subject, "[TSMC Alert] Fell below 20-day moving average");
        assert!(msg.body.contains("95.00"));
        assert!(msg.body.contains("100.00"));
    }

    #[test]
    fn drop_message() {
        let msg = EmailMessage::for_alert(
            "TSMC",
            &Alert::Drop {
                tier: DropTier::TenPercent,
                price: 89.0,
                anchor: 100.0,
                drop_pct: 11.0,
            },
        );
        assert_eq!(msg.subject, "[TSMC Alert] Down a further 10% since breakdown");
        assert_eq!(
            msg.body,
            "Current price 89.00 is down 11.00% from the breakdown price 100.00."
        );
    }
}
