// notifier/sendgrid/sender.rs

use crate::model::NotifyError;
use crate::notifier::EmailMessage;
use crate::notifier::sendgrid::SendGridNotifier;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Builds the v3 mail/send request body.
pub fn mail_payload(from: &str, to: &str, message: &EmailMessage) -> Value {
    json!({
        "personalizations": [{ "to": [{ "email": to }] }],
        "from": { "email": from },
        "subject": message.subject,
        "content": [{ "type": "text/plain", "value": message.body }]
    })
}

/// Sends a plain-text email through SendGrid.
pub async fn send_mail(notifier: &SendGridNotifier, message: &EmailMessage) -> Result<(), NotifyError> {
    let api_key = notifier
        .email
        .api_key
        .as_deref()
        .ok_or(NotifyError::MissingSetting("SENDGRID_API_KEY"))?;
    let from = notifier
        .email
        .from
        .as_deref()
        .ok_or(NotifyError::MissingSetting("FROM_EMAIL"))?;
    let to = notifier
        .email
        .to
        .as_deref()
        .ok_or(NotifyError::MissingSetting("TO_EMAIL"))?;

    info!("📤 Sending email: {}", message.subject);
    let response = notifier
        .client
        .post(&notifier.endpoint)
        .bearer_auth(api_key)
        .json(&mail_payload(from, to, message))
        .send()
        .await
        .map_err(|e| {
            warn!("❌ SendGrid send() failed: {:?}", e);
            NotifyError::Http(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        warn!("❌ SendGrid responded [{}]: {}", status, body);
        return Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    info!("✅ Email sent [{}]: {}", status, message.subject);
    Ok(())
}
