//! Transport client — the single point of entry for all backend calls.
//!
//! The controller never builds a request itself: it hands a validated draft
//! to a `Transport` implementation and interprets the result. `ApiClient` is
//! the real implementation; tests swap in mocks at the trait seam.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::TransportError;
use crate::models::contact::ContactSubmission;
use crate::models::job::JobApplication;

const CONTACT_PATH: &str = "/api/contact";
const APPLICATION_PATH: &str = "/api/job-application";
const HEALTH_PATH: &str = "/api/health";

const CONTACT_FALLBACK: &str = "Failed to submit contact form";
const APPLICATION_FALLBACK: &str = "Failed to submit application";

/// Acknowledgment body the backend returns for both form endpoints.
/// Error responses carry `detail` (and sometimes `message`) instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAck {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: NaiveDateTime,
}

/// Seam between the controller and the network. Implemented per draft type
/// so a controller for one form cannot be wired to the wrong endpoint.
#[async_trait]
pub trait Transport<D>: Send + Sync {
    async fn send(&self, draft: &D) -> Result<ServerAck, TransportError>;
}

/// HTTP client for the site backend. Base URL and timeout are injected at
/// construction; nothing is read from the environment afterwards.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        ApiClient {
            client: reqwest::Client::builder()
                .timeout(config.request_timeout())
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self.client.get(self.url(HEALTH_PATH)).send().await;
        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("Health check request failed: {e}");
                return Err(TransportError::Unreachable);
            }
        };
        if !response.status().is_success() {
            return Err(TransportError::Rejected {
                status: response.status().as_u16(),
                message: "Health check failed".to_string(),
            });
        }
        response.json::<HealthStatus>().await.map_err(|e| {
            warn!("Health check body did not parse: {e}");
            TransportError::MalformedAck
        })
    }
}

#[async_trait]
impl Transport<ContactSubmission> for ApiClient {
    async fn send(&self, draft: &ContactSubmission) -> Result<ServerAck, TransportError> {
        debug!("Submitting contact form for {}", draft.email);
        let response = self
            .client
            .post(self.url(CONTACT_PATH))
            .json(draft)
            .send()
            .await;
        read_ack(response, CONTACT_FALLBACK).await
    }
}

#[async_trait]
impl Transport<JobApplication> for ApiClient {
    async fn send(&self, draft: &JobApplication) -> Result<ServerAck, TransportError> {
        let resume = draft.resume.as_ref().ok_or(TransportError::MissingAttachment)?;

        let mut form = Form::new();
        for (part_name, value) in draft.scalar_fields() {
            form = form.text(part_name, value.to_string());
        }

        // Original filename travels with the binary part; the multipart
        // boundary and outer content type are left to reqwest.
        let part = Part::bytes(resume.bytes.to_vec()).file_name(resume.filename.clone());
        let part = match part.mime_str(&resume.content_type) {
            Ok(p) => p,
            Err(e) => {
                warn!("Resume declared an unusable MIME type: {e}");
                Part::bytes(resume.bytes.to_vec()).file_name(resume.filename.clone())
            }
        };
        form = form.part("resume", part);

        debug!(
            "Submitting application for '{}' from {} ({} byte resume)",
            draft.position,
            draft.email,
            resume.size()
        );
        let response = self
            .client
            .post(self.url(APPLICATION_PATH))
            .multipart(form)
            .send()
            .await;
        read_ack(response, APPLICATION_FALLBACK).await
    }
}

/// Shared response handling for both form endpoints: non-2xx surfaces the
/// server's `detail`/`message` when present (else `fallback`); a 2xx body
/// that fails to parse is malformed; a request that never produced a
/// response is reported generically with the cause logged, not shown.
async fn read_ack(
    response: Result<reqwest::Response, reqwest::Error>,
    fallback: &str,
) -> Result<ServerAck, TransportError> {
    let response = match response {
        Ok(r) => r,
        Err(e) => {
            warn!("Form submission request failed: {e}");
            return Err(TransportError::Unreachable);
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => {
            warn!("Form submission response body unreadable: {e}");
            return Err(TransportError::Unreachable);
        }
    };

    if !status.is_success() {
        let message = serde_json::from_str::<ServerAck>(&body)
            .ok()
            .and_then(|ack| ack.detail.or(ack.message))
            .unwrap_or_else(|| fallback.to_string());
        warn!("Form submission rejected ({status}): {message}");
        return Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str::<ServerAck>(&body).map_err(|e| {
        warn!("Form submission acknowledgment did not parse: {e}");
        TransportError::MalformedAck
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::models::job::ResumeFile;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&Config {
            api_base_url: server.uri(),
            ..Default::default()
        })
    }

    fn contact_draft() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    fn application_draft() -> JobApplication {
        JobApplication {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+91 12345 67890".to_string(),
            position: "Full Stack Developer".to_string(),
            resume: Some(ResumeFile::new(
                "jane_doe.pdf",
                "application/pdf",
                Bytes::from_static(b"%PDF-1.4"),
            )),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_contact_posts_json_and_parses_ack() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(header("content-type", "application/json"))
            .and(body_string_contains("\"serviceInterest\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Your message has been sent successfully!"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ack = client_for(&server).send(&contact_draft()).await.unwrap();
        assert!(ack.success);
        assert_eq!(
            ack.message.as_deref(),
            Some("Your message has been sent successfully!")
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "detail": "Only PDF and DOC/DOCX files are allowed" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&contact_draft())
            .await
            .unwrap_err();
        match err {
            TransportError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Only PDF and DOC/DOCX files are allowed");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_detail_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&contact_draft())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), CONTACT_FALLBACK);
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send(&contact_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::MalformedAck));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_generically() {
        // Nothing listens on the discard port.
        let client = ApiClient::new(&Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        });
        let err = client.send(&contact_draft()).await.unwrap_err();
        assert!(matches!(err, TransportError::Unreachable));
        assert!(err.to_string().contains("Failed to send"));
    }

    #[tokio::test]
    async fn test_application_posts_multipart_with_resume() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/job-application"))
            .and(body_string_contains("jane_doe.pdf"))
            .and(body_string_contains("Full Stack Developer"))
            .and(body_string_contains("name=\"resume\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Application submitted successfully!"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ack = client_for(&server)
            .send(&application_draft())
            .await
            .unwrap();
        assert!(ack.success);
    }

    #[tokio::test]
    async fn test_application_without_resume_never_sends() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut draft = application_draft();
        draft.resume = None;
        let err = client_for(&server).send(&draft).await.unwrap_err();
        assert!(matches!(err, TransportError::MissingAttachment));
    }

    #[tokio::test]
    async fn test_health_parses_status_and_timestamp() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "timestamp": "2026-08-28T12:00:00.123456"
            })))
            .mount(&server)
            .await;

        let health = client_for(&server).health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.timestamp.format("%Y-%m-%d").to_string(), "2026-08-28");
    }
}
