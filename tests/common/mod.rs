use async_trait::async_trait;
use awscmd_core::{ServiceError, Transport, WireRequest};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, ServiceError>>>,
    requests: Mutex<Vec<WireRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value, ServiceError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(responses: Vec<Value>) -> Arc<Self> {
        Self::new(responses.into_iter().map(Ok).collect())
    }

    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn body(&self, index: usize) -> Value {
        serde_json::from_str(&self.requests()[index].body).unwrap()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    fn region(&self) -> String {
        "us-east-1".to_string()
    }

    fn endpoint(&self, endpoint_prefix: &str) -> String {
        format!("https://{}.us-east-1.amazonaws.com", endpoint_prefix)
    }

    async fn send(&self, request: WireRequest) -> Result<Value, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ServiceError::new(
                "test",
                "NoScriptedResponse",
                &format!("unexpected call to {}", request.operation),
                500,
            ))
        })
    }
}
