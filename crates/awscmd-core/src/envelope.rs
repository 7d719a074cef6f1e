//! The uniform result of one invocation (or one page of one).

use crate::error::{InvokeError, InvokeResult};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The projected value, `Ok(None)` when the projection yields nothing.
    pub result: InvokeResult<Option<Value>>,
    /// Side-channel message for the caller, never part of the output.
    pub note: Option<String>,
}

impl Envelope {
    pub fn ok(value: Option<Value>) -> Self {
        Self {
            result: Ok(value),
            note: None,
        }
    }

    pub fn failed(error: InvokeError) -> Self {
        Self {
            result: Err(error),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }
}

impl From<InvokeResult<Option<Value>>> for Envelope {
    fn from(result: InvokeResult<Option<Value>>) -> Self {
        Self { result, note: None }
    }
}

/// Flatten envelopes into the items a pipeline consumer sees: arrays are
/// enumerated element by element, other values pass through, nothing is
/// dropped. Stops at the first failed envelope.
pub fn collect_items<I>(envelopes: I) -> InvokeResult<Vec<Value>>
where
    I: IntoIterator<Item = Envelope>,
{
    let mut items = Vec::new();
    for envelope in envelopes {
        match envelope.result? {
            Some(Value::Array(values)) => items.extend(values),
            Some(value) => items.push(value),
            None => {}
        }
    }
    Ok(items)
}
