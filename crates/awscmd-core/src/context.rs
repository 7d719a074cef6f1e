//! Per-invocation state.

use crate::builder::{check_required, lookup};
use crate::error::{InvokeError, InvokeResult, ServiceError};
use crate::operation::Operation;
use crate::projection::Projection;
use serde_json::Value;
use std::fmt;

/// Cross-cutting switches every command accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Raw `--select` expression.
    pub select: Option<String>,
    /// Deprecated `--pass-thru` switch.
    pub pass_thru: bool,
    /// Skip the confirmation prompt.
    pub force: bool,
    /// Fetch a single page even when more are available.
    pub no_auto_iteration: bool,
}

/// The bound input of one call plus everything resolved from the options.
///
/// Construction validates the selector and the required inputs, so a
/// context that exists is one the invoker may send.
pub struct InvocationContext<O: Operation> {
    input: O::Input,
    /// Snapshot of the caller's input, used for `^param` echoes and the
    /// confirmation target.
    bound: Value,
    projection: Projection,
    no_auto_iteration: bool,
}

impl<O: Operation> fmt::Debug for InvocationContext<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("operation", &O::DESCRIPTOR.name)
            .field("bound", &self.bound)
            .field("projection", &self.projection)
            .field("no_auto_iteration", &self.no_auto_iteration)
            .finish()
    }
}

impl<O: Operation> InvocationContext<O> {
    pub fn new(input: O::Input, options: &InvocationOptions) -> InvokeResult<Self> {
        let descriptor = &O::DESCRIPTOR;
        let projection =
            Projection::resolve(descriptor, options.select.as_deref(), options.pass_thru)?;
        let bound = serde_json::to_value(&input).map_err(|e| {
            InvokeError::validation(format!("cannot serialize {} input: {}", descriptor.name, e))
        })?;
        check_required(descriptor, &bound)?;
        Ok(Self {
            input,
            bound,
            projection,
            no_auto_iteration: options.no_auto_iteration,
        })
    }

    pub fn input(&self) -> &O::Input {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut O::Input {
        &mut self.input
    }

    pub fn bound(&self) -> &Value {
        &self.bound
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn no_auto_iteration(&self) -> bool {
        self.no_auto_iteration
    }

    /// Project a typed response into the value handed to the caller.
    pub fn project(&self, output: &O::Output) -> InvokeResult<Option<Value>> {
        if self.projection == Projection::Nothing {
            return Ok(None);
        }
        let descriptor = &O::DESCRIPTOR;
        let response = serde_json::to_value(output).map_err(|e| {
            ServiceError::parse(descriptor.service.endpoint_prefix, &e.to_string(), 200)
                .with_action(descriptor.name)
        })?;
        Ok(self.projection.project(&self.bound, &response))
    }

    /// Name of the resource a mutating call acts on, if the operation asks
    /// for confirmation.
    pub fn confirmation_target(&self) -> Option<String> {
        let field = O::DESCRIPTOR.confirm_target?;
        Some(match lookup(&self.bound, field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        })
    }

    /// Decide whether the call may go ahead. `prompt` receives the
    /// operation name and the target and is only consulted when the
    /// operation asks for confirmation and `force` is off.
    pub fn should_process<F>(&self, force: bool, prompt: F) -> bool
    where
        F: FnOnce(&str, &str) -> bool,
    {
        match self.confirmation_target() {
            Some(_) if force => true,
            Some(target) => prompt(O::DESCRIPTOR.name, &target),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{DefaultSelect, OperationDescriptor, Protocol, ServiceSpec};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    const SERVICE: &ServiceSpec = &ServiceSpec {
        name: "Test Service",
        endpoint_prefix: "test",
        signing_name: "test",
        protocol: Protocol::AwsJson { target_prefix: "test" },
    };

    struct DeleteThing;

    #[derive(Debug, Default, Serialize)]
    struct DeleteThingInput {
        #[serde(rename = "ThingId", skip_serializing_if = "Option::is_none")]
        thing_id: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct DeleteThingOutput {
        #[serde(rename = "Name", default)]
        name: Option<String>,
    }

    impl Operation for DeleteThing {
        type Input = DeleteThingInput;
        type Output = DeleteThingOutput;
        const DESCRIPTOR: OperationDescriptor = SERVICE
            .operation("DeleteThing")
            .inputs(&["ThingId"])
            .required(&["ThingId"])
            .outputs(&["Name"])
            .select(DefaultSelect::Field("Name"))
            .pass_thru("ThingId")
            .confirm("ThingId");
    }

    fn input(id: &str) -> DeleteThingInput {
        DeleteThingInput {
            thing_id: Some(id.to_string()),
        }
    }

    #[test]
    fn new_resolves_default_projection() {
        let ctx = InvocationContext::<DeleteThing>::new(input("t1"), &InvocationOptions::default())
            .unwrap();
        assert_eq!(ctx.projection(), &Projection::Field("Name"));
        assert_eq!(ctx.bound(), &json!({"ThingId": "t1"}));
    }

    #[test]
    fn new_rejects_missing_required() {
        let err = InvocationContext::<DeleteThing>::new(
            DeleteThingInput::default(),
            &InvocationOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn new_rejects_select_with_pass_thru() {
        let options = InvocationOptions {
            select: Some("*".into()),
            pass_thru: true,
            ..Default::default()
        };
        assert!(InvocationContext::<DeleteThing>::new(input("t1"), &options).is_err());
    }

    #[test]
    fn project_uses_bound_input_for_echo() {
        let options = InvocationOptions {
            pass_thru: true,
            ..Default::default()
        };
        let ctx = InvocationContext::<DeleteThing>::new(input("t1"), &options).unwrap();
        let output = DeleteThingOutput {
            name: Some("other".into()),
        };
        assert_eq!(ctx.project(&output).unwrap(), Some(json!("t1")));
    }

    #[test]
    fn confirmation_prompt_names_target() {
        let ctx = InvocationContext::<DeleteThing>::new(input("t1"), &InvocationOptions::default())
            .unwrap();
        assert_eq!(ctx.confirmation_target().as_deref(), Some("t1"));

        let mut seen = None;
        let proceed = ctx.should_process(false, |op, target| {
            seen = Some((op.to_string(), target.to_string()));
            false
        });
        assert!(!proceed);
        assert_eq!(seen, Some(("DeleteThing".to_string(), "t1".to_string())));
    }

    #[test]
    fn force_skips_prompt() {
        let ctx = InvocationContext::<DeleteThing>::new(input("t1"), &InvocationOptions::default())
            .unwrap();
        assert!(ctx.should_process(true, |_, _| panic!("prompted despite force")));
    }
}
