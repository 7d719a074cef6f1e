//! Result projection: what a command hands back to its caller.
//!
//! The `--select` string is parsed once, against the operation's
//! descriptor, into a [`Projection`]. Applying it afterwards is a plain
//! match with no name resolution left to do.

use crate::builder::lookup;
use crate::error::{InvokeError, InvokeResult};
use crate::operation::{DefaultSelect, OperationDescriptor};
use serde_json::Value;

/// Selector value meaning "the entire response".
pub const SELECT_WHOLE: &str = "*";
/// Prefix marking a selector that echoes an input parameter.
pub const SELECT_PARAM_PREFIX: char = '^';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// The entire response.
    Whole,
    /// One top-level response field.
    Field(&'static str),
    /// The caller's own value for an input parameter (dotted path).
    Param(String),
    /// No output.
    Nothing,
}

impl Projection {
    /// Resolve `--select` / `--pass-thru` for one operation.
    pub fn resolve(
        descriptor: &OperationDescriptor,
        select: Option<&str>,
        pass_thru: bool,
    ) -> InvokeResult<Self> {
        if pass_thru && select.is_some() {
            return Err(InvokeError::validation(
                "--select and --pass-thru cannot be used together",
            ));
        }

        if pass_thru {
            let param = descriptor.pass_thru.ok_or_else(|| {
                InvokeError::validation(format!(
                    "{} has no parameter to pass through",
                    descriptor.name
                ))
            })?;
            log::warn!(
                "--pass-thru is deprecated, use --select '{}{}' instead",
                SELECT_PARAM_PREFIX,
                param
            );
            return Ok(Self::Param(param.to_string()));
        }

        let Some(select) = select.map(str::trim) else {
            return Ok(match descriptor.default_select {
                DefaultSelect::Whole => Self::Whole,
                DefaultSelect::Field(field) => Self::Field(field),
                DefaultSelect::Nothing => Self::Nothing,
            });
        };

        if select == SELECT_WHOLE {
            return Ok(Self::Whole);
        }

        if let Some(param) = select.strip_prefix(SELECT_PARAM_PREFIX) {
            if param.is_empty() {
                return Err(InvokeError::validation(
                    "selector '^' must name an input parameter",
                ));
            }
            return descriptor
                .input_param(param)
                .map(Self::Param)
                .ok_or_else(|| {
                    InvokeError::validation(format!(
                        "{} has no parameter named '{}'",
                        descriptor.name, param
                    ))
                });
        }

        if select.is_empty() {
            return Err(InvokeError::validation("selector must not be empty"));
        }

        descriptor
            .output_field(select)
            .map(Self::Field)
            .ok_or_else(|| {
                InvokeError::validation(format!(
                    "{} response has no field named '{}' (expected one of: {})",
                    descriptor.name,
                    select,
                    descriptor.outputs.join(", ")
                ))
            })
    }

    /// Pick the value to emit from a bound request and its response.
    pub fn project(&self, bound: &Value, response: &Value) -> Option<Value> {
        match self {
            Self::Whole => Some(response.clone()),
            Self::Field(field) => lookup(response, field).cloned(),
            Self::Param(path) => lookup(bound, path).cloned(),
            Self::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Protocol, ServiceSpec};
    use serde_json::json;

    const SERVICE: &ServiceSpec = &ServiceSpec {
        name: "Test Service",
        endpoint_prefix: "test",
        signing_name: "test",
        protocol: Protocol::AwsJson { target_prefix: "test" },
    };

    const LIST: OperationDescriptor = SERVICE
        .operation("ListSecrets")
        .inputs(&["MaxResults", "NextToken", "Filters"])
        .outputs(&["SecretList", "NextToken"])
        .select(DefaultSelect::Field("SecretList"));

    const TAG: OperationDescriptor = SERVICE
        .operation("TagResource")
        .inputs(&["SecretId", "Tags"])
        .select(DefaultSelect::Nothing)
        .pass_thru("SecretId");

    fn response() -> Value {
        json!({"SecretList": [{"Name": "a"}, {"Name": "b"}], "NextToken": "t1"})
    }

    #[test]
    fn whole_yields_response_unchanged() {
        let projection = Projection::resolve(&LIST, Some("*"), false).unwrap();
        assert_eq!(projection, Projection::Whole);
        assert_eq!(projection.project(&json!({}), &response()), Some(response()));
    }

    #[test]
    fn field_yields_that_field() {
        let projection = Projection::resolve(&LIST, Some("nexttoken"), false).unwrap();
        assert_eq!(projection, Projection::Field("NextToken"));
        assert_eq!(projection.project(&json!({}), &response()), Some(json!("t1")));
    }

    #[test]
    fn param_echoes_caller_value_not_response() {
        let projection = Projection::resolve(&LIST, Some("^NextToken"), false).unwrap();
        let bound = json!({"NextToken": "caller-token"});
        assert_eq!(
            projection.project(&bound, &response()),
            Some(json!("caller-token"))
        );
    }

    #[test]
    fn default_uses_descriptor() {
        assert_eq!(
            Projection::resolve(&LIST, None, false).unwrap(),
            Projection::Field("SecretList")
        );
        assert_eq!(
            Projection::resolve(&TAG, None, false).unwrap(),
            Projection::Nothing
        );
    }

    #[test]
    fn nothing_projects_nothing() {
        assert_eq!(Projection::Nothing.project(&json!({}), &response()), None);
    }

    #[test]
    fn missing_field_projects_nothing() {
        let projection = Projection::Field("NextToken");
        assert_eq!(projection.project(&json!({}), &json!({"SecretList": []})), None);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Projection::resolve(&LIST, Some("Secrets"), false).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("SecretList"));
    }

    #[test]
    fn unknown_param_is_rejected() {
        assert!(Projection::resolve(&LIST, Some("^SecretId"), false).is_err());
        assert!(Projection::resolve(&LIST, Some("^"), false).is_err());
        assert!(Projection::resolve(&LIST, Some(""), false).is_err());
    }

    #[test]
    fn pass_thru_echoes_designated_param() {
        let projection = Projection::resolve(&TAG, None, true).unwrap();
        assert_eq!(projection, Projection::Param("SecretId".into()));
        assert_eq!(
            projection.project(&json!({"SecretId": "db"}), &json!({})),
            Some(json!("db"))
        );
    }

    #[test]
    fn select_with_pass_thru_is_rejected() {
        let err = Projection::resolve(&TAG, Some("*"), true).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn pass_thru_without_designated_param_is_rejected() {
        assert!(Projection::resolve(&LIST, None, true).is_err());
    }
}
