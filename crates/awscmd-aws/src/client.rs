//! SigV4-signed HTTP transport.
//!
//! [`AwsClient`] turns a [`WireRequest`] into a signed reqwest call,
//! retries transient failures with exponential backoff, and decodes the
//! JSON response or the AWS error carried in it.

use crate::config::{AwsCredentials, AwsRegion, RetryConfig, RetryMode, SdkConfig};
use crate::signing::{canonical_query_string, uri_encode_path, SigV4Signer};
use async_trait::async_trait;
use awscmd_core::{HttpMethod, ServiceError, Transport, WireRequest};
use chrono::Utc;
use percent_encoding::percent_decode_str;
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::time::Duration;

/// Raw response from an AWS API call.
#[derive(Debug, Clone)]
pub struct AwsResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub request_id: Option<String>,
}

impl AwsResponse {
    /// Decode a response into JSON, or into the error it carries.
    pub fn into_json(self, service: &str, action: &str) -> Result<Value, ServiceError> {
        if !(200..300).contains(&self.status) {
            let header_code = self.headers.get("x-amzn-errortype").map(String::as_str);
            let mut err =
                ServiceError::parse_json_error(service, self.status, header_code, &self.body)
                    .with_action(action);
            if let Some(id) = self.request_id {
                err = err.with_request_id(id);
            }
            return Err(err);
        }

        if self.body.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&self.body).map_err(|e| {
            let mut err = ServiceError::parse(
                service,
                &format!("Failed to parse response: {}", e),
                self.status,
            )
            .with_action(action);
            if let Some(id) = self.request_id.clone() {
                err = err.with_request_id(id);
            }
            err
        })
    }
}

/// Signs, sends and retries requests for every service in one region.
#[derive(Debug, Clone)]
pub struct AwsClient {
    http: Client,
    credentials: AwsCredentials,
    region: AwsRegion,
    retry_config: RetryConfig,
    endpoint_override: Option<String>,
    user_agent: String,
}

impl AwsClient {
    pub fn new(config: SdkConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut user_agent = format!("awscmd/{}", env!("CARGO_PKG_VERSION"));
        if let Some(ref app) = config.app_name {
            user_agent.push_str(" app/");
            user_agent.push_str(app);
        }

        if config.credentials.is_expired() {
            log::warn!(
                "AWS credentials from {} have expired",
                config.credentials.provider_name.as_deref().unwrap_or("unknown source")
            );
        }

        Self {
            http,
            credentials: config.credentials,
            region: config.region,
            retry_config: config.retry_config,
            endpoint_override: config.endpoint_url,
            user_agent,
        }
    }

    /// Raw path the request is sent to and signed over: the endpoint's own
    /// base path, if any, followed by the operation path.
    fn request_path(&self, request: &WireRequest) -> String {
        let (_, base) = split_endpoint(&self.endpoint(request.endpoint_prefix));
        format!("{}{}", base, request.path)
    }

    /// Full request URL for a wire request, query string included.
    fn request_url(&self, request: &WireRequest) -> String {
        let (origin, _) = split_endpoint(&self.endpoint(request.endpoint_prefix));
        let mut url = format!("{}{}", origin, uri_encode_path(&self.request_path(request)));
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&canonical_query_string(&request.query));
        }
        url
    }

    async fn execute_with_retry(&self, request: &WireRequest) -> Result<AwsResponse, ServiceError> {
        let service = request.endpoint_prefix;
        let max_attempts = self.retry_config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            let (reason, last_response) = match self.execute_signed(request).await {
                Ok(response) if (200..300).contains(&response.status) => return Ok(response),
                Ok(response) => {
                    let header_code = response.headers.get("x-amzn-errortype").map(String::as_str);
                    let err = ServiceError::parse_json_error(
                        service,
                        response.status,
                        header_code,
                        &response.body,
                    );
                    if !err.retryable {
                        return Ok(response);
                    }
                    (err.code, Some(response))
                }
                Err(e) if e.retryable => (e.message, None),
                Err(e) => return Err(e.with_action(request.operation)),
            };

            attempt += 1;
            if attempt >= max_attempts {
                return match last_response {
                    Some(response) => Ok(response),
                    None => Err(ServiceError::network(
                        service,
                        &format!("{} (after {} attempts)", reason, attempt),
                        false,
                    )
                    .with_action(request.operation)),
                };
            }

            let delay = self.calculate_backoff(attempt - 1);
            log::warn!(
                "AWS {} {} retryable error (attempt {}/{}): {} - retrying in {}ms",
                service,
                request.operation,
                attempt,
                max_attempts,
                reason,
                delay
            );
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    async fn execute_signed(&self, request: &WireRequest) -> Result<AwsResponse, ServiceError> {
        let service = request.endpoint_prefix;
        let url = self.request_url(request);
        let path = self.request_path(request);
        let host = extract_host(&url)
            .ok_or_else(|| ServiceError::network(service, &format!("invalid endpoint URL '{}'", url), false))?;

        let mut headers = request.headers.clone();
        headers.insert("host".to_string(), host);

        let signer = SigV4Signer::new(&self.credentials, &self.region.name, request.signing_name);
        let signed = signer.sign(
            request.method.as_str(),
            &path,
            &request.query,
            &headers,
            &request.body,
            Utc::now(),
        );
        log::debug!("{} {} ({} bytes)", request.method.as_str(), url, request.body.len());

        let mut req = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        for (key, value) in &signed.headers {
            // reqwest derives Host from the URL
            if key != "host" {
                req = req.header(key.as_str(), value.as_str());
            }
        }
        req = req.header("user-agent", &self.user_agent);
        if !request.body.is_empty() {
            req = req.body(request.body.clone());
        }

        let resp = req.send().await.map_err(|e| classify_http_error(service, &e))?;

        let status = resp.status().as_u16();
        let mut resp_headers = BTreeMap::new();
        for (key, value) in resp.headers() {
            if let Ok(v) = value.to_str() {
                resp_headers.insert(key.as_str().to_string(), v.to_string());
            }
        }
        let request_id = resp_headers
            .get("x-amzn-requestid")
            .or_else(|| resp_headers.get("x-amz-request-id"))
            .cloned();
        let body = resp.text().await.map_err(|e| classify_http_error(service, &e))?;

        Ok(AwsResponse {
            status,
            headers: resp_headers,
            body,
            request_id,
        })
    }

    /// Exponential backoff, capped, with full jitter in standard mode.
    fn calculate_backoff(&self, attempt: u32) -> u64 {
        let base = self.retry_config.initial_backoff_ms;
        let max = self.retry_config.max_backoff_ms;
        let exponential = base.saturating_mul(2u64.saturating_pow(attempt));
        let capped = exponential.min(max);

        match self.retry_config.mode {
            RetryMode::Standard => {
                use rand::Rng;
                rand::thread_rng().gen_range(0..=capped)
            }
            RetryMode::Legacy => capped,
        }
    }
}

#[async_trait]
impl Transport for AwsClient {
    fn region(&self) -> String {
        self.region.name.clone()
    }

    fn endpoint(&self, endpoint_prefix: &str) -> String {
        match self.endpoint_override {
            Some(ref url) => url.clone(),
            None => self.region.endpoint(endpoint_prefix),
        }
    }

    async fn send(&self, request: WireRequest) -> Result<Value, ServiceError> {
        let response = self.execute_with_retry(&request).await?;
        response.into_json(request.endpoint_prefix, request.operation)
    }
}

/// Origin (`scheme://host[:port]`) and decoded base path of an endpoint.
fn split_endpoint(endpoint: &str) -> (String, String) {
    match url::Url::parse(endpoint) {
        Ok(parsed) => {
            let base = percent_decode_str(parsed.path().trim_end_matches('/'))
                .decode_utf8_lossy()
                .into_owned();
            (parsed.origin().ascii_serialization(), base)
        }
        Err(_) => (endpoint.trim_end_matches('/').to_string(), String::new()),
    }
}

fn extract_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Map a reqwest failure onto the AWS error model. Host lookup failures
/// get their own code so the caller can point at the region.
fn classify_http_error(service: &str, err: &reqwest::Error) -> ServiceError {
    let message = error_chain(err);
    if is_name_resolution_message(&message) {
        return ServiceError::name_resolution(service, &message);
    }
    let mut e = ServiceError::network(service, &message, err.is_timeout() || err.is_connect());
    if let Some(status) = err.status() {
        e.status_code = status.as_u16();
    }
    e
}

fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn is_name_resolution_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    [
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "nodename nor servname",
        "no such host",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::OperationDescriptor;
    use awscmd_core::{Protocol, ServiceSpec};
    use serde_json::json;

    const ROBO: &ServiceSpec = &ServiceSpec {
        name: "AWS IoT RoboRunner",
        endpoint_prefix: "iotroborunner",
        signing_name: "iotroborunner",
        protocol: Protocol::RestJson,
    };

    const LIST_WORKERS: OperationDescriptor = ROBO.get("ListWorkers", "/listWorkers");

    fn client(endpoint_url: Option<&str>) -> AwsClient {
        let config = SdkConfig::new(AwsRegion::new("us-west-2"), AwsCredentials::new("AKID", "secret"))
            .with_endpoint_url(endpoint_url.map(String::from));
        AwsClient::new(config)
    }

    fn response(status: u16, body: &str) -> AwsResponse {
        AwsResponse {
            status,
            headers: BTreeMap::new(),
            body: body.to_string(),
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn refused_connection_is_http_error() {
        let mut config = SdkConfig::new(AwsRegion::new("us-west-2"), AwsCredentials::new("AKID", "secret"))
            .with_endpoint_url(Some("http://127.0.0.1:1".to_string()));
        config.retry_config.max_attempts = 1;
        let client = AwsClient::new(config);
        let request = WireRequest::build(&LIST_WORKERS, &json!({"site": "s1"})).unwrap();

        let err = tokio_test::block_on(client.send(request)).unwrap_err();
        assert_eq!(err.code, "HttpError");
        assert_eq!(err.service, "iotroborunner");
    }

    #[test]
    fn endpoint_uses_region_unless_overridden() {
        assert_eq!(
            client(None).endpoint("secretsmanager"),
            "https://secretsmanager.us-west-2.amazonaws.com"
        );
        assert_eq!(
            client(Some("http://localhost:4566")).endpoint("secretsmanager"),
            "http://localhost:4566"
        );
        assert_eq!(client(None).region(), "us-west-2");
    }

    #[test]
    fn request_url_encodes_query() {
        let request =
            WireRequest::build(&LIST_WORKERS, &json!({"site": "arn:aws:site/1", "fleet": "f"}))
                .unwrap();
        assert_eq!(
            client(None).request_url(&request),
            "https://iotroborunner.us-west-2.amazonaws.com/listWorkers?fleet=f&site=arn%3Aaws%3Asite%2F1"
        );
    }

    #[test]
    fn endpoint_base_path_is_sent_and_signed() {
        let client = client(Some("http://proxy:8080/aws/"));
        let request = WireRequest::build(&LIST_WORKERS, &json!({"site": "s1"})).unwrap();
        assert_eq!(client.request_path(&request), "/aws/listWorkers");
        assert_eq!(client.request_url(&request), "http://proxy:8080/aws/listWorkers?site=s1");
    }

    #[test]
    fn root_endpoint_adds_no_base_path() {
        let client = client(Some("http://localhost:4566"));
        let request = WireRequest::build(&LIST_WORKERS, &json!({})).unwrap();
        assert_eq!(client.request_path(&request), "/listWorkers");
        assert_eq!(client.request_url(&request), "http://localhost:4566/listWorkers");
    }

    #[test]
    fn host_keeps_port() {
        assert_eq!(extract_host("http://localhost:4566/x").as_deref(), Some("localhost:4566"));
        assert_eq!(
            extract_host("https://s3vectors.us-east-1.api.aws/ListIndexes").as_deref(),
            Some("s3vectors.us-east-1.api.aws")
        );
        assert!(extract_host("not a url").is_none());
    }

    #[test]
    fn empty_success_body_is_empty_object() {
        let value = response(200, "").into_json("iotroborunner", "DeleteSite").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn error_body_is_parsed_with_request_id() {
        let err = response(
            400,
            r#"{"__type":"com.amazonaws.secretsmanager#ResourceNotFoundException","message":"not found"}"#,
        )
        .into_json("secretsmanager", "GetSecretValue")
        .unwrap_err();
        assert_eq!(err.code, "ResourceNotFoundException");
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
        assert_eq!(err.action.as_deref(), Some("GetSecretValue"));
        assert!(!err.retryable);
    }

    #[test]
    fn error_type_header_is_used_for_rest_json() {
        let mut resp = response(409, r#"{"message":"conflict"}"#);
        resp.headers.insert(
            "x-amzn-errortype".to_string(),
            "ConflictException:http://internal.amazon.com/".to_string(),
        );
        let err = resp.into_json("iotroborunner", "CreateSite").unwrap_err();
        assert_eq!(err.code, "ConflictException");
        assert_eq!(err.message, "conflict");
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = response(200, "<html>").into_json("s3vectors", "ListIndexes").unwrap_err();
        assert_eq!(err.code, "ParseError");
    }

    #[test]
    fn name_resolution_messages_are_recognised() {
        assert!(is_name_resolution_message(
            "error sending request: client error (Connect): dns error: failed to lookup address information"
        ));
        assert!(is_name_resolution_message("No such host is known."));
        assert!(!is_name_resolution_message("connection refused"));
    }

    #[test]
    fn backoff_is_capped() {
        let config = SdkConfig::new(AwsRegion::default(), AwsCredentials::new("a", "b"))
            .with_retry_config(RetryConfig {
                max_attempts: 5,
                mode: RetryMode::Legacy,
                initial_backoff_ms: 100,
                max_backoff_ms: 1_000,
            });
        let client = AwsClient::new(config);
        assert_eq!(client.calculate_backoff(0), 100);
        assert_eq!(client.calculate_backoff(2), 400);
        assert_eq!(client.calculate_backoff(10), 1_000);
    }

    #[test]
    fn standard_backoff_has_jitter_within_cap() {
        let client = client(None);
        for attempt in 0..5 {
            assert!(client.calculate_backoff(attempt) <= 20_000);
        }
    }
}
