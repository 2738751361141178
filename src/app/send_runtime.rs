//! Background email delivery so the UI thread never blocks on the network.
//!
//! One task per accepted submission.  The outcome comes back over a channel
//! tagged with the submission's generation id; the main loop drops anything
//! stale.  Boolean-outcome model: a 2xx response is success, everything else
//! (including transport errors) is failure.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::EmailConfig;

/// The EmailJS send endpoint.
const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Trimmed form values carried into the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("email delivery is not configured")]
    MissingConfig,
    #[error("email service rejected the message (status {0})")]
    Rejected(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Outcome of one submission, tagged with its generation.
#[derive(Debug)]
pub struct SendUpdate {
    pub generation: u64,
    pub result: Result<(), SendError>,
}

/// Fire off the delivery request.  No retry, no timeout, no cancellation —
/// the submission lifecycle enforces a single request in flight.
pub fn spawn_send(
    tx: mpsc::UnboundedSender<SendUpdate>,
    generation: u64,
    config: Option<EmailConfig>,
    payload: EmailPayload,
) {
    tokio::spawn(async move {
        let result = match config {
            Some(config) => send(&config, &payload).await,
            None => Err(SendError::MissingConfig),
        };
        if let Err(ref err) = result {
            tracing::warn!("email send failed: {err}");
        }
        let _ = tx.send(SendUpdate { generation, result });
    });
}

async fn send(config: &EmailConfig, payload: &EmailPayload) -> Result<(), SendError> {
    let body = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: payload,
    };

    let response = reqwest::Client::new().post(SEND_URL).json(&body).send().await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(SendError::Rejected(response.status().as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let payload = EmailPayload {
            from_name: "Jo Ann".into(),
            from_email: "a@b.com".into(),
            subject: "Hello there".into(),
            message: "This is a valid message body.".into(),
        };
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &payload,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["from_email"], "a@b.com");
    }
}
