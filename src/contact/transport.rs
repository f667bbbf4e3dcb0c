//! Delivery of validated contact requests.

use crate::config::Config;
use crate::contact::form::ContactFormData;
use crate::retry::{deliver_with_retry, RetryPolicy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("contact request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("contact endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("contact delivery rejected: {0}")]
    Rejected(String),
}

impl TransportError {
    /// Network failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Request(_) => true,
            TransportError::Status { status, .. } => *status >= 500,
            TransportError::Rejected(_) => false,
        }
    }
}

/// Sends one validated form somewhere a human will read it.
pub trait ContactTransport: Send + Sync + 'static {
    fn send(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Waits a fixed delay and then reports the outcome it was built with.
///
/// With `SimulatedTransport::new` every send succeeds, which is how the site
/// behaves until a real endpoint is configured.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    succeed: bool,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            succeed: true,
        }
    }

    /// Variant whose sends always fail, for previewing the error banner.
    pub fn failing(delay: Duration) -> Self {
        Self {
            delay,
            succeed: false,
        }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, data: &ContactFormData) -> Result<(), TransportError> {
        debug!("Simulating contact delivery for {} ({:?})", data.email, self.delay);
        sleep(self.delay).await;

        if self.succeed {
            Ok(())
        } else {
            Err(TransportError::Rejected("simulated failure".to_string()))
        }
    }
}

/// JSON body posted to the contact webhook.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    #[serde(flatten)]
    form: &'a ContactFormData,
    submitted_at: DateTime<Utc>,
}

/// POSTs the form as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
    url: String,
    retry: RetryPolicy,
}

impl WebhookTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            retry: RetryPolicy::webhook(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn post_once(&self, payload: &WebhookPayload<'_>) -> Result<(), TransportError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(())
    }
}

impl ContactTransport for WebhookTransport {
    async fn send(&self, data: &ContactFormData) -> Result<(), TransportError> {
        let payload = WebhookPayload {
            form: data,
            submitted_at: Utc::now(),
        };
        let payload = &payload;

        deliver_with_retry(&self.retry, move || self.post_once(payload)).await?;

        info!("Contact request from {} delivered", data.email);
        Ok(())
    }
}

/// Transport selected by configuration.
#[derive(Debug, Clone)]
pub enum SiteTransport {
    Simulated(SimulatedTransport),
    Webhook(WebhookTransport),
}

impl SiteTransport {
    /// Webhook when `CONTACT_WEBHOOK_URL` is set, simulated delivery otherwise.
    pub fn from_config(config: &Config) -> Self {
        match &config.contact_webhook_url {
            Some(url) => SiteTransport::Webhook(WebhookTransport::new(url.clone())),
            None => SiteTransport::Simulated(SimulatedTransport::new(Duration::from_millis(
                config.simulated_send_delay_ms,
            ))),
        }
    }
}

impl ContactTransport for SiteTransport {
    async fn send(&self, data: &ContactFormData) -> Result<(), TransportError> {
        match self {
            SiteTransport::Simulated(transport) => transport.send(data).await,
            SiteTransport::Webhook(transport) => transport.send(data).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn form() -> ContactFormData {
        ContactFormData {
            name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            phone: "".to_string(),
            company: "2 personas".to_string(),
            subject: "booking".to_string(),
            message: "Queremos un tour a Chichén Itzá".to_string(),
        }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy::new(NonZeroU32::MIN.saturating_add(2), Duration::from_millis(5))
    }

    // ==================== SimulatedTransport Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_then_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        transport.send(&form()).await.expect("Should succeed");

        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_simulated_transport() {
        let transport = SimulatedTransport::failing(Duration::from_millis(10));
        let err = transport.send(&form()).await.unwrap_err();
        assert!(matches!(err, TransportError::Rejected(_)));
    }

    // ==================== WebhookTransport Tests ====================

    #[tokio::test]
    async fn test_webhook_posts_form_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .and(body_partial_json(serde_json::json!({
                "name": "Ana López",
                "email": "ana@example.com",
                "company": "2 personas",
                "subject": "booking",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport =
            WebhookTransport::new(format!("{}/contact", server.uri())).with_retry(fast_retry());

        transport.send(&form()).await.expect("Should succeed");
    }

    #[tokio::test]
    async fn test_webhook_retries_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(3)
            .mount(&server)
            .await;

        let transport = WebhookTransport::new(server.uri()).with_retry(fast_retry());
        let err = transport.send(&form()).await.unwrap_err();

        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_webhook_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422))
            .expect(1)
            .mount(&server)
            .await;

        let transport = WebhookTransport::new(server.uri()).with_retry(fast_retry());
        let err = transport.send(&form()).await.unwrap_err();

        assert!(matches!(err, TransportError::Status { status: 422, .. }));
    }

    #[test]
    fn test_payload_is_flat_json() {
        let data = form();
        let payload = WebhookPayload {
            form: &data,
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], "Ana López");
        assert_eq!(json["phone"], "");
        assert!(json["submitted_at"].is_string());
    }

    // ==================== SiteTransport Tests ====================

    #[test]
    fn test_site_transport_from_config() {
        let mut config = Config::default();
        assert!(matches!(
            SiteTransport::from_config(&config),
            SiteTransport::Simulated(_)
        ));

        config.contact_webhook_url = Some("https://hooks.example.com/contact".to_string());
        assert!(matches!(
            SiteTransport::from_config(&config),
            SiteTransport::Webhook(_)
        ));
    }
}
