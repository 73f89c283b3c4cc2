pub mod message;
pub mod sendgrid;

use crate::model::NotifyError;

pub use message::EmailMessage;
pub use sendgrid::SendGridNotifier;

/// Delivers one alert email. Callers treat failures as non-fatal.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}
