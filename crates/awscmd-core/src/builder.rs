//! Request-building helpers shared by every operation input.
//!
//! Inputs are plain structs whose fields are all `Option`s (or owned
//! collections) serialized with `skip_serializing_if`. The helpers here
//! cover the parts that are not just "copy field A to field B": pruning
//! nested structures nobody filled in, idempotency tokens, and the
//! required-field check run before any request leaves the process.

use crate::error::{InvokeError, InvokeResult};
use crate::operation::OperationDescriptor;
use serde_json::Value;

/// A nested request structure assembled member by member.
pub trait Nested {
    /// True when no member was supplied.
    fn is_unset(&self) -> bool;
}

impl<T: Nested> Nested for Option<T> {
    fn is_unset(&self) -> bool {
        self.as_ref().map_or(true, Nested::is_unset)
    }
}

/// Keep a nested structure only if at least one of its members was set.
pub fn nested<T: Nested>(value: T) -> Option<T> {
    if value.is_unset() {
        None
    } else {
        Some(value)
    }
}

/// An empty collection on the command line means "not supplied".
pub fn collection<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Use the caller's idempotency token or mint a fresh one.
pub fn idempotency_token(supplied: Option<String>) -> Option<String> {
    Some(supplied.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()))
}

/// Walk a dotted path through a serialized request or response.
pub fn lookup<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(value, |current, segment| current.get(segment))
        .filter(|found| !found.is_null())
}

/// Reject requests missing a required field.
///
/// A required field that is absent or `null` is a validation error. A
/// required string that is present but empty only produces a warning, the
/// service gets to decide what it means.
pub fn check_required(descriptor: &OperationDescriptor, bound: &Value) -> InvokeResult<()> {
    for field in descriptor.required {
        if let Some((parent, _)) = field.rsplit_once('.') {
            if lookup(bound, parent).is_none() {
                continue;
            }
        }
        match lookup(bound, field) {
            None => {
                return Err(InvokeError::validation(format!(
                    "{} requires parameter '{}'",
                    descriptor.name, field
                )));
            }
            Some(Value::String(s)) if s.is_empty() => {
                log::warn!(
                    "Required parameter '{}' of {} was supplied as an empty string",
                    field,
                    descriptor.name
                );
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Protocol, ServiceSpec};
    use serde::Serialize;
    use serde_json::json;

    const SERVICE: &ServiceSpec = &ServiceSpec {
        name: "Test Service",
        endpoint_prefix: "test",
        signing_name: "test",
        protocol: Protocol::RestJson,
    };

    const CREATE: OperationDescriptor = SERVICE
        .post("CreateWorker", "/createWorker")
        .required(&["name", "fleet", "vendorProperties.vendorWorkerId"]);

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Coordinates {
        #[serde(skip_serializing_if = "Option::is_none")]
        x: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        y: Option<f64>,
    }

    impl Nested for Coordinates {
        fn is_unset(&self) -> bool {
            self.x.is_none() && self.y.is_none()
        }
    }

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Position {
        #[serde(skip_serializing_if = "Option::is_none")]
        cartesian_coordinates: Option<Coordinates>,
    }

    impl Nested for Position {
        fn is_unset(&self) -> bool {
            self.cartesian_coordinates.is_unset()
        }
    }

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Request {
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    }

    fn build(x: Option<f64>, y: Option<f64>) -> Request {
        Request {
            position: nested(Position {
                cartesian_coordinates: nested(Coordinates { x, y }),
            }),
        }
    }

    #[test]
    fn unset_nested_structure_is_absent() {
        let request = build(None, None);
        assert!(request.position.is_none());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn partially_set_nested_structure_is_kept() {
        let request = build(Some(1.5), None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"position": {"cartesianCoordinates": {"x": 1.5}}})
        );
    }

    #[test]
    fn explicit_zero_is_sent() {
        let request = build(Some(0.0), Some(0.0));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["position"]["cartesianCoordinates"]["y"], json!(0.0));
    }

    #[test]
    fn empty_collection_is_unset() {
        assert_eq!(collection::<String>(vec![]), None);
        assert_eq!(collection(vec!["a".to_string()]), Some(vec!["a".to_string()]));
    }

    #[test]
    fn idempotency_token_keeps_caller_value() {
        assert_eq!(idempotency_token(Some("tok".into())).as_deref(), Some("tok"));
        let minted = idempotency_token(None).unwrap();
        assert_eq!(minted.len(), 36);
    }

    #[test]
    fn lookup_walks_dotted_paths() {
        let value = json!({"a": {"b": {"c": 3}}, "n": null});
        assert_eq!(lookup(&value, "a.b.c"), Some(&json!(3)));
        assert_eq!(lookup(&value, "a.x"), None);
        assert_eq!(lookup(&value, "n"), None);
    }

    #[test]
    fn missing_required_field_fails() {
        let err = check_required(&CREATE, &json!({"name": "w1"})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("fleet"));
    }

    #[test]
    fn null_required_field_fails() {
        let err = check_required(&CREATE, &json!({"name": null, "fleet": "f"})).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn empty_required_string_only_warns() {
        assert!(check_required(&CREATE, &json!({"name": "", "fleet": "f"})).is_ok());
    }

    #[test]
    fn nested_required_member_only_checked_when_parent_present() {
        assert!(check_required(&CREATE, &json!({"name": "w", "fleet": "f"})).is_ok());
        let err = check_required(
            &CREATE,
            &json!({"name": "w", "fleet": "f", "vendorProperties": {"vendorWorkerIpAddress": "10.0.0.1"}}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("vendorProperties.vendorWorkerId"));
    }
}
