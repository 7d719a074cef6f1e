//! The boundary between a built request and the network.
//!
//! [`WireRequest`] is the protocol-level shape of a call (method, path,
//! query, headers, JSON body) derived from an operation descriptor and a
//! serialized input. [`Transport`] is whatever signs and sends it.

use crate::error::{InvokeError, InvokeResult, ServiceError};
use crate::operation::{HttpMethod, OperationDescriptor, Protocol};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Content type for AWS JSON 1.1 services.
pub const AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
/// Content type for REST-JSON services.
pub const REST_JSON: &str = "application/json";

/// A request ready to be signed and sent.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub endpoint_prefix: &'static str,
    pub signing_name: &'static str,
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl WireRequest {
    /// Lay out a serialized input according to the operation's binding.
    pub fn build(descriptor: &OperationDescriptor, input: &Value) -> InvokeResult<Self> {
        let service = descriptor.service;
        let mut request = Self {
            endpoint_prefix: service.endpoint_prefix,
            signing_name: service.signing_name,
            operation: descriptor.name,
            method: descriptor.method,
            path: descriptor.path,
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: String::new(),
        };

        match (service.protocol, descriptor.method) {
            (Protocol::AwsJson { target_prefix }, _) => {
                request
                    .headers
                    .insert("content-type".to_string(), AWS_JSON_1_1.to_string());
                request.headers.insert(
                    "x-amz-target".to_string(),
                    format!("{}.{}", target_prefix, descriptor.name),
                );
                request.body = json_body(input);
            }
            (Protocol::RestJson, HttpMethod::Get) => {
                request.query = query_params(descriptor, input)?;
            }
            (Protocol::RestJson, HttpMethod::Post) => {
                request
                    .headers
                    .insert("content-type".to_string(), REST_JSON.to_string());
                request.body = json_body(input);
            }
        }
        Ok(request)
    }
}

fn json_body(input: &Value) -> String {
    match input {
        Value::Null => "{}".to_string(),
        other => other.to_string(),
    }
}

/// Flatten the top-level scalar inputs of a GET operation into a query string.
fn query_params(
    descriptor: &OperationDescriptor,
    input: &Value,
) -> InvokeResult<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    let Some(fields) = input.as_object() else {
        return Ok(params);
    };
    for (name, value) in fields {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => {
                return Err(InvokeError::validation(format!(
                    "{} cannot send structured parameter '{}' in a query string",
                    descriptor.name, name
                )));
            }
        };
        params.insert(name.clone(), rendered);
    }
    Ok(params)
}

/// Signs and sends wire requests. Implementations own retry policy; the
/// invoker above them never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Region the transport signs for.
    fn region(&self) -> String;

    /// Base URL requests for a service are sent to.
    fn endpoint(&self, endpoint_prefix: &str) -> String;

    /// Send a request and return the decoded JSON response body. Empty
    /// bodies decode to an empty object.
    async fn send(&self, request: WireRequest) -> Result<Value, ServiceError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn region(&self) -> String {
        (**self).region()
    }

    fn endpoint(&self, endpoint_prefix: &str) -> String {
        (**self).endpoint(endpoint_prefix)
    }

    async fn send(&self, request: WireRequest) -> Result<Value, ServiceError> {
        (**self).send(request).await
    }
}
