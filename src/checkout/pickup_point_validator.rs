use std::sync::Arc;

use crate::api::rest::{
    PickupPointValidate, PickupPointValidateRequest, PickupPointValidateResponse, WebRequestClient,
};
use crate::log::{Logger, Record, RecordAction, RecordStatus};
use crate::metrics::{
    Metrics, OUTCOME_FAIL_OPEN_CONFIG, OUTCOME_FAIL_OPEN_REMOTE, OUTCOME_INVALID, OUTCOME_VALID,
};
use crate::session::SessionStore;
use crate::settings::Settings;

pub const VALIDATION_HTTP_ERROR_SESSION_KEY: &str = "packetery_validation_http_error";

const ERROR_RECORD_TITLE: &str = "Pickup point could not be validated.";
const INVALID_CREDENTIALS_MESSAGE: &str = "API credentials are not set correctly.";

/// Validates the chosen pickup point against the Packeta API.
///
/// Configuration and remote failures never block the checkout: the point is
/// accepted and the failure is written to the plugin log.
pub struct PickupPointValidator {
    api_key: Option<String>,
    endpoint: String,
    enabled: bool,
    logger: Arc<dyn Logger>,
    client: Arc<dyn WebRequestClient>,
    session: Arc<dyn SessionStore>,
    metrics: Option<Arc<Metrics>>,
}

impl PickupPointValidator {
    pub fn new(
        settings: &Settings,
        logger: Arc<dyn Logger>,
        client: Arc<dyn WebRequestClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            endpoint: settings.validation.endpoint.clone(),
            enabled: settings.validation.enabled,
            logger,
            client,
            session,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Whether the checkout should call `validate` at all.
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    pub async fn validate(
        &self,
        request: &PickupPointValidateRequest,
    ) -> PickupPointValidateResponse {
        let endpoint = match PickupPointValidate::create_with_valid_api_key(
            self.client.clone(),
            self.api_key.as_deref(),
            self.endpoint.clone(),
        ) {
            Ok(endpoint) => endpoint,
            Err(_) => {
                self.logger.add(
                    error_record().with_param("errorMessage", INVALID_CREDENTIALS_MESSAGE),
                );
                self.record_outcome(OUTCOME_FAIL_OPEN_CONFIG);
                return PickupPointValidateResponse::accepted();
            }
        };

        // Successful requests are not logged.
        match endpoint.validate(request).await {
            Ok(response) => {
                let outcome = if response.is_valid { OUTCOME_VALID } else { OUTCOME_INVALID };
                self.record_outcome(outcome);
                response
            }
            Err(error) => {
                let message = error.to_string();
                self.logger.add(
                    error_record()
                        .with_param("errorMessage", message.clone())
                        .with_param("request", request.submittable_data()),
                );
                self.session.set(VALIDATION_HTTP_ERROR_SESSION_KEY, message);
                self.record_outcome(OUTCOME_FAIL_OPEN_REMOTE);
                PickupPointValidateResponse::accepted()
            }
        }
    }

    /// Error of the last failed remote call, removed once read.
    pub fn take_http_error(&self) -> Option<String> {
        self.session.take(VALIDATION_HTTP_ERROR_SESSION_KEY)
    }

    fn record_outcome(&self, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_validation(outcome);
        }
    }
}

fn error_record() -> Record {
    Record::new(RecordAction::PickupPointValidate, RecordStatus::Error, ERROR_RECORD_TITLE)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rest::errors::RestError;
    use crate::log::MemoryLogger;
    use crate::session::MemorySession;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    const API_KEY: &str = "0123456789abcdef";
    const POINT_IS_FULL_REPLY: &str =
        r#"{"isValid": false, "errors": [{"code": "PickupPointIsFull", "description": "Full"}]}"#;

    struct StubClient {
        reply: Result<String, String>,
        calls: AtomicU32,
    }

    impl StubClient {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                calls: AtomicU32::new(0),
            })
        }

        fn unreachable(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicU32::new(0),
            })
        }
    }

    #[async_trait]
    impl WebRequestClient for StubClient {
        async fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<String, RestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(RestError::Transport)
        }
    }

    struct ErrorPageClient;

    #[async_trait]
    impl WebRequestClient for ErrorPageClient {
        async fn post_json(
            &self,
            _url: &str,
            _body: &serde_json::Value,
        ) -> Result<String, RestError> {
            Err(RestError::Status {
                status: 502,
                body: "<html>".repeat(20_000),
            })
        }
    }

    struct Fixture {
        validator: PickupPointValidator,
        logger: Arc<MemoryLogger>,
        session: Arc<MemorySession>,
        client: Arc<StubClient>,
        metrics: Arc<Metrics>,
    }

    fn fixture(api_key: Option<&str>, client: Arc<StubClient>) -> Fixture {
        let settings = Settings {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        };
        let logger = Arc::new(MemoryLogger::new());
        let session = Arc::new(MemorySession::new());
        let metrics = Arc::new(Metrics::new().unwrap());
        let validator =
            PickupPointValidator::new(&settings, logger.clone(), client.clone(), session.clone())
                .with_metrics(metrics.clone());

        Fixture {
            validator,
            logger,
            session,
            client,
            metrics,
        }
    }

    fn request() -> PickupPointValidateRequest {
        PickupPointValidateRequest::new("12345")
            .with_carrier("czzpoint", None)
            .with_country("cz")
    }

    #[tokio::test]
    async fn test_invalid_api_key_fails_open() {
        let fixture = fixture(Some("not-a-key"), StubClient::replying(r#"{"isValid": false}"#));

        let response = fixture.validator.validate(&request()).await;

        assert_eq!(response, PickupPointValidateResponse::new(true, vec![]));
        assert_eq!(fixture.client.calls.load(Ordering::SeqCst), 0);

        let records = fixture.logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].action, RecordAction::PickupPointValidate);
        assert_eq!(records[0].status, RecordStatus::Error);
        assert_eq!(records[0].title, "Pickup point could not be validated.");
        assert_eq!(records[0].params["errorMessage"], "API credentials are not set correctly.");
        assert_eq!(fixture.session.get(VALIDATION_HTTP_ERROR_SESSION_KEY), None);
        assert_eq!(
            fixture
                .metrics
                .pickup_point_validations
                .with_label_values(&[OUTCOME_FAIL_OPEN_CONFIG])
                .get(),
            1
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_open() {
        let fixture = fixture(None, StubClient::replying(r#"{"isValid": false}"#));

        let response = fixture.validator.validate(&request()).await;

        assert!(response.is_valid);
        assert!(response.errors.is_empty());
        assert_eq!(fixture.logger.len(), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_fails_open() {
        let fixture = fixture(Some(API_KEY), StubClient::unreachable("connection refused"));

        let response = fixture.validator.validate(&request()).await;

        assert_eq!(response, PickupPointValidateResponse::accepted());
        assert_eq!(fixture.client.calls.load(Ordering::SeqCst), 1);

        let records = fixture.logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].params["errorMessage"], "Request failed: connection refused");
        assert_eq!(records[0].params["request"]["point"]["id"], "12345");
        assert!(records[0].params["request"].get("apiKey").is_none());

        assert_eq!(
            fixture.validator.take_http_error().as_deref(),
            Some("Request failed: connection refused")
        );
        assert_eq!(fixture.validator.take_http_error(), None);
        assert_eq!(
            fixture
                .metrics
                .pickup_point_validations
                .with_label_values(&[OUTCOME_FAIL_OPEN_REMOTE])
                .get(),
            1
        );
    }

    #[tokio::test]
    async fn test_undecodable_reply_fails_open() {
        let fixture = fixture(Some(API_KEY), StubClient::replying("not json"));

        let response = fixture.validator.validate(&request()).await;

        assert!(response.is_valid);
        assert_eq!(fixture.logger.len(), 1);
        assert!(fixture.session.get(VALIDATION_HTTP_ERROR_SESSION_KEY).is_some());
    }

    #[tokio::test]
    async fn test_error_page_body_is_summarized() {
        let settings = Settings {
            api_key: Some(API_KEY.to_string()),
            ..Default::default()
        };
        let logger = Arc::new(MemoryLogger::new());
        let session = Arc::new(MemorySession::new());
        let validator = PickupPointValidator::new(
            &settings,
            logger.clone(),
            Arc::new(ErrorPageClient),
            session.clone(),
        );

        let response = validator.validate(&request()).await;
        assert!(response.is_valid);

        let message = validator.take_http_error().unwrap();
        assert!(message.len() < 200);
        assert!(message.starts_with("Unexpected HTTP status 502: <html>"));
        assert!(message.ends_with("(truncated...)"));

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].params["errorMessage"], message.as_str());
    }

    #[tokio::test]
    async fn test_successful_validation_is_not_logged() {
        let fixture = fixture(
            Some(API_KEY),
            StubClient::replying(POINT_IS_FULL_REPLY),
        );

        let response = fixture.validator.validate(&request()).await;

        assert!(!response.is_valid);
        assert_eq!(response.errors[0].code, "PickupPointIsFull");
        assert!(fixture.logger.is_empty());
        assert_eq!(fixture.session.get(VALIDATION_HTTP_ERROR_SESSION_KEY), None);
        assert_eq!(
            fixture.metrics.pickup_point_validations.with_label_values(&[OUTCOME_INVALID]).get(),
            1
        );
    }

    #[tokio::test]
    async fn test_valid_point_passes_through() {
        let fixture = fixture(
            Some(API_KEY),
            StubClient::replying(r#"{"isValid": true, "errors": []}"#),
        );

        let response = fixture.validator.validate(&request()).await;

        assert!(response.is_valid);
        assert!(fixture.logger.is_empty());
        assert!(!fixture.validator.is_active());
    }
}
