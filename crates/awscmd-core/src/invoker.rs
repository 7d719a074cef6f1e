//! Sending one built request and classifying what comes back.

use crate::context::InvocationContext;
use crate::envelope::Envelope;
use crate::error::{InvokeError, InvokeResult, ServiceError};
use crate::operation::{Operation, OperationDescriptor};
use crate::wire::{Transport, WireRequest};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Runs operations over an injected transport. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct Invoker<T> {
    transport: T,
}

impl<T: Transport> Invoker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke an operation once and decode its typed response.
    ///
    /// At most one request is sent. Retries, if any, are the transport's.
    pub async fn invoke<O: Operation>(
        &self,
        input: &O::Input,
        cancel: &CancellationToken,
    ) -> InvokeResult<O::Output> {
        let descriptor = &O::DESCRIPTOR;
        let body = serde_json::to_value(input).map_err(|e| {
            InvokeError::validation(format!("cannot serialize {} input: {}", descriptor.name, e))
        })?;
        let response = self.send(descriptor, &body, cancel).await?;
        serde_json::from_value(response).map_err(|e| {
            ServiceError::parse(descriptor.service.endpoint_prefix, &e.to_string(), 200)
                .with_action(descriptor.name)
                .into()
        })
    }

    /// Invoke a single-shot operation and project its result.
    pub async fn execute<O: Operation>(
        &self,
        ctx: &InvocationContext<O>,
        cancel: &CancellationToken,
    ) -> Envelope {
        match self.invoke::<O>(ctx.input(), cancel).await {
            Ok(output) => ctx.project(&output).into(),
            Err(err) => Envelope::failed(err),
        }
    }

    async fn send(
        &self,
        descriptor: &OperationDescriptor,
        body: &Value,
        cancel: &CancellationToken,
    ) -> InvokeResult<Value> {
        let cancelled = || InvokeError::Cancelled {
            operation: descriptor.name.to_string(),
        };
        if cancel.is_cancelled() {
            return Err(cancelled());
        }

        let request = WireRequest::build(descriptor, body)?;
        let endpoint = self.transport.endpoint(descriptor.service.endpoint_prefix);
        log::info!(
            "Invoking {} operation '{}' on endpoint {}",
            descriptor.service.name,
            descriptor.name,
            endpoint
        );

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled()),
            result = self.transport.send(request) => result,
        };

        result.map_err(|err| {
            if err.is_name_resolution() {
                annotate_name_resolution(err, &endpoint, &self.transport.region()).into()
            } else {
                err.into()
            }
        })
    }
}

/// Append the endpoint that failed to resolve to a DNS failure's message.
fn annotate_name_resolution(mut err: ServiceError, endpoint: &str, region: &str) -> ServiceError {
    err.message = format!(
        "{}. Name resolution failure attempting to reach {} in region {} \
         (as supplied by --region or the configured default)",
        err.message, endpoint, region
    );
    err
}
