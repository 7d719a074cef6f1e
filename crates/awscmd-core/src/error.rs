//! Error types for operation invocation.
//!
//! [`ServiceError`] mirrors the AWS error model (code, message, status,
//! request id) and is what a [`Transport`](crate::wire::Transport) hands
//! back when a call fails. [`InvokeError`] is the closed taxonomy every
//! command surfaces: local validation, transport/remote failure, or
//! cancellation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code used for DNS / host lookup failures.
pub const NAME_RESOLUTION_FAILURE: &str = "NameResolutionFailure";

/// A failure reported by the remote service or by the HTTP layer below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    /// The AWS error code (e.g., "ResourceNotFoundException").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The HTTP status code, 0 when no response was received.
    pub status_code: u16,
    /// AWS request ID for tracing.
    pub request_id: Option<String>,
    /// Endpoint prefix of the service that failed (e.g., "secretsmanager").
    pub service: String,
    /// The API action that failed.
    pub action: Option<String>,
    /// Whether the transport considers this error retryable.
    pub retryable: bool,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AWS {} error [{}]: {} (HTTP {})",
            self.service, self.code, self.message, self.status_code
        )?;
        if let Some(ref req_id) = self.request_id {
            write!(f, " [RequestId: {}]", req_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a new service error.
    pub fn new(service: &str, code: &str, message: &str, status_code: u16) -> Self {
        let retryable = Self::is_retryable_code(code, status_code);
        Self {
            code: code.to_string(),
            message: message.to_string(),
            status_code,
            request_id: None,
            service: service.to_string(),
            action: None,
            retryable,
        }
    }

    /// A network-level failure where no HTTP response was received.
    pub fn network(service: &str, message: &str, retryable: bool) -> Self {
        Self {
            code: "HttpError".to_string(),
            message: message.to_string(),
            status_code: 0,
            request_id: None,
            service: service.to_string(),
            action: None,
            retryable,
        }
    }

    /// The endpoint host name could not be resolved.
    pub fn name_resolution(service: &str, message: &str) -> Self {
        Self {
            code: NAME_RESOLUTION_FAILURE.to_string(),
            message: message.to_string(),
            status_code: 0,
            request_id: None,
            service: service.to_string(),
            action: None,
            retryable: false,
        }
    }

    /// The response body could not be decoded.
    pub fn parse(service: &str, message: &str, status_code: u16) -> Self {
        Self::new(service, "ParseError", message, status_code)
    }

    pub fn with_request_id(mut self, id: String) -> Self {
        self.request_id = Some(id);
        self
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn is_name_resolution(&self) -> bool {
        self.code == NAME_RESOLUTION_FAILURE
    }

    /// Determine if an error code/status is retryable per AWS SDK retry policy.
    fn is_retryable_code(code: &str, status_code: u16) -> bool {
        if matches!(status_code, 429 | 500 | 502 | 503 | 504) {
            return true;
        }
        matches!(
            code,
            "Throttling"
                | "ThrottlingException"
                | "ThrottledException"
                | "RequestThrottledException"
                | "TooManyRequestsException"
                | "ProvisionedThroughputExceededException"
                | "RequestLimitExceeded"
                | "LimitExceededException"
                | "InternalError"
                | "InternalFailure"
                | "InternalServiceError"
                | "InternalServerException"
                | "ServiceUnavailable"
                | "ServiceUnavailableException"
                | "RequestTimeout"
                | "RequestTimeoutException"
        )
    }

    /// Parse an AWS JSON error response.
    ///
    /// ```json
    /// {
    ///   "__type": "com.amazonaws.secretsmanager#ResourceNotFoundException",
    ///   "message": "Secrets Manager can't find the specified secret."
    /// }
    /// ```
    ///
    /// REST-JSON services may instead carry the code in the
    /// `x-amzn-errortype` header, which callers pass as `header_code`.
    pub fn parse_json_error(
        service: &str,
        status_code: u16,
        header_code: Option<&str>,
        body: &str,
    ) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let body_code = parsed.as_ref().and_then(|val| {
            val.get("__type")
                .or_else(|| val.get("code"))
                .or_else(|| val.get("Code"))
                .and_then(|v| v.as_str())
                .map(String::from)
        });
        let code = body_code
            .or_else(|| header_code.map(String::from))
            .map(|s| normalize_error_code(&s))
            .unwrap_or_else(|| format!("Http{}", status_code));

        let message = parsed
            .as_ref()
            .and_then(|val| {
                val.get("message")
                    .or_else(|| val.get("Message"))
                    .and_then(|v| v.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {} from {}", status_code, service)
                } else {
                    body.chars().take(200).collect()
                }
            });
        Self::new(service, &code, &message, status_code)
    }
}

/// Strip the shape namespace and the header suffix from an AWS error code:
/// `com.amazonaws.x#Code` and `Code:http://...` both become `Code`.
fn normalize_error_code(raw: &str) -> String {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).to_string()
}

/// Every failure a command can surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvokeError {
    /// Rejected locally before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The transport or the remote service failed.
    #[error(transparent)]
    Transport(#[from] ServiceError),

    /// The caller cancelled while the operation was in flight.
    #[error("operation {operation} was cancelled")]
    Cancelled { operation: String },
}

impl InvokeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Convenience result type for operation invocation.
pub type InvokeResult<T> = Result<T, InvokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ServiceError::new("secretsmanager", "ResourceNotFoundException", "missing", 400);
        let s = err.to_string();
        assert!(s.contains("secretsmanager"));
        assert!(s.contains("ResourceNotFoundException"));
        assert!(s.contains("400"));
    }

    #[test]
    fn error_display_with_request_id() {
        let err = ServiceError::new("s3vectors", "NotFoundException", "no bucket", 404)
            .with_request_id("req-abc-123".into());
        assert!(err.to_string().contains("req-abc-123"));
    }

    #[test]
    fn parse_json_error_namespaced_type() {
        let json = r#"{"__type":"com.amazonaws.secretsmanager#ResourceNotFoundException","message":"Secrets Manager can't find the specified secret."}"#;
        let err = ServiceError::parse_json_error("secretsmanager", 400, None, json);
        assert_eq!(err.code, "ResourceNotFoundException");
        assert!(err.message.contains("can't find"));
        assert!(!err.retryable);
    }

    #[test]
    fn parse_json_error_header_code() {
        let err = ServiceError::parse_json_error(
            "iotroborunner",
            409,
            Some("ConflictException:http://internal.amazon.com/coral/com.amazon.robo/"),
            r#"{"message":"worker exists"}"#,
        );
        assert_eq!(err.code, "ConflictException");
        assert_eq!(err.message, "worker exists");
    }

    #[test]
    fn parse_json_error_unparseable_body() {
        let err = ServiceError::parse_json_error("datapipeline", 502, None, "<html>bad gateway</html>");
        assert_eq!(err.code, "Http502");
        assert!(err.message.contains("bad gateway"));
        assert!(err.retryable);
    }

    #[test]
    fn retryable_throttling() {
        assert!(ServiceError::new("datapipeline", "ThrottlingException", "slow", 400).retryable);
    }

    #[test]
    fn not_retryable_access_denied() {
        assert!(!ServiceError::new("s3vectors", "AccessDeniedException", "no", 403).retryable);
    }

    #[test]
    fn name_resolution_is_classified() {
        let err = ServiceError::name_resolution("secretsmanager", "dns error");
        assert!(err.is_name_resolution());
        assert!(!ServiceError::network("secretsmanager", "reset", true).is_name_resolution());
    }

    #[test]
    fn invoke_error_wraps_service_error() {
        let err: InvokeError = ServiceError::new("datapipeline", "InvalidRequestException", "bad", 400).into();
        assert!(matches!(err, InvokeError::Transport(_)));
        assert!(err.to_string().contains("InvalidRequestException"));
    }
}
