pub mod sender;

use crate::config::EmailConfig;
use crate::model::NotifyError;
use crate::notifier::{EmailMessage, Notifier};
use reqwest::Client;

pub const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

pub struct SendGridNotifier {
    pub client: Client,
    pub email: EmailConfig,
    pub endpoint: String,
}

impl SendGridNotifier {
    pub fn new(email: EmailConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| NotifyError::Http(e.to_string()))?;
        Ok(Self {
            client,
            email,
            endpoint: SENDGRID_SEND_URL.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for SendGridNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        sender::send_mail(self, message).await
    }
}
