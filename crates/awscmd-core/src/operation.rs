//! Static descriptions of services and their operations.
//!
//! Every command is backed by a zero-sized marker type implementing
//! [`Operation`]. Its [`OperationDescriptor`] is a `const` naming the wire
//! binding, the input and output field sets, the default selection and the
//! confirmation/pass-through parameters. Nothing here is resolved at run
//! time from strings except what the caller types on the command line.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Wire protocol spoken by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// AWS JSON 1.1: `POST /` with an `X-Amz-Target: {prefix}.{Operation}` header.
    AwsJson { target_prefix: &'static str },
    /// REST-JSON: one HTTP route per operation.
    RestJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A remote AWS service.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Display name used in diagnostics.
    pub name: &'static str,
    /// First label of the regional endpoint host.
    pub endpoint_prefix: &'static str,
    /// Service name used in the SigV4 credential scope.
    pub signing_name: &'static str,
    pub protocol: Protocol,
}

impl ServiceSpec {
    /// Describe an operation bound as `POST /` (AWS JSON services).
    pub const fn operation(&'static self, name: &'static str) -> OperationDescriptor {
        OperationDescriptor {
            service: self,
            name,
            method: HttpMethod::Post,
            path: "/",
            inputs: &[],
            required: &[],
            outputs: &[],
            default_select: DefaultSelect::Whole,
            pass_thru: None,
            confirm_target: None,
        }
    }

    /// Describe a REST-JSON operation bound to `GET path`.
    pub const fn get(&'static self, name: &'static str, path: &'static str) -> OperationDescriptor {
        let mut op = self.operation(name);
        op.method = HttpMethod::Get;
        op.path = path;
        op
    }

    /// Describe a REST-JSON operation bound to `POST path`.
    pub const fn post(&'static self, name: &'static str, path: &'static str) -> OperationDescriptor {
        let mut op = self.operation(name);
        op.path = path;
        op
    }
}

/// What a command returns when the caller gives no selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSelect {
    Whole,
    Field(&'static str),
    Nothing,
}

/// Everything the shared request/response cycle needs to know about one
/// remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub service: &'static ServiceSpec,
    /// API operation name, e.g. `GetSecretValue`.
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    /// Wire names of every input field. Members of nested structures are
    /// listed with dotted paths (`position.cartesianCoordinates.x`).
    pub inputs: &'static [&'static str],
    /// Required inputs. A dotted member is only required when its parent
    /// structure is present.
    pub required: &'static [&'static str],
    /// Wire names of the top-level response fields.
    pub outputs: &'static [&'static str],
    pub default_select: DefaultSelect,
    /// Input echoed by the deprecated `--pass-thru` switch.
    pub pass_thru: Option<&'static str>,
    /// Input naming the resource a mutating call acts on. Operations with a
    /// confirmation target ask before running unless forced.
    pub confirm_target: Option<&'static str>,
}

impl OperationDescriptor {
    pub const fn inputs(mut self, inputs: &'static [&'static str]) -> Self {
        self.inputs = inputs;
        self
    }

    pub const fn required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    pub const fn outputs(mut self, outputs: &'static [&'static str]) -> Self {
        self.outputs = outputs;
        self
    }

    pub const fn select(mut self, default_select: DefaultSelect) -> Self {
        self.default_select = default_select;
        self
    }

    pub const fn pass_thru(mut self, param: &'static str) -> Self {
        self.pass_thru = Some(param);
        self
    }

    pub const fn confirm(mut self, target: &'static str) -> Self {
        self.confirm_target = Some(target);
        self
    }

    /// Canonical name of the output field matching `name`, ignoring case.
    pub fn output_field(&self, name: &str) -> Option<&'static str> {
        self.outputs
            .iter()
            .copied()
            .find(|field| field.eq_ignore_ascii_case(name))
    }

    /// Canonical dotted path of the input parameter matching `name`,
    /// ignoring case. The top-level structure of a nested input counts as
    /// a parameter of its own.
    pub fn input_param(&self, name: &str) -> Option<String> {
        self.inputs.iter().find_map(|field| {
            if field.eq_ignore_ascii_case(name) {
                return Some((*field).to_string());
            }
            field
                .split('.')
                .next()
                .filter(|top| top.eq_ignore_ascii_case(name))
                .map(String::from)
        })
    }

    /// `service:Operation`, used in log lines and errors.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.service.endpoint_prefix, self.name)
    }
}

/// A remote API operation.
pub trait Operation {
    /// Request shape. Unset optional fields must not serialize.
    type Input: Serialize + Send + Sync;
    /// Response shape.
    type Output: Serialize + DeserializeOwned + Send;

    const DESCRIPTOR: OperationDescriptor;
}

/// A list operation that returns results a page at a time.
pub trait Paginated: Operation {
    /// Continuation token currently set on the request.
    fn token(input: &Self::Input) -> Option<&str>;

    fn set_token(input: &mut Self::Input, token: Option<String>);

    /// Token the server returned for the following page.
    fn next_token(output: &Self::Output) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &ServiceSpec = &ServiceSpec {
        name: "Test Service",
        endpoint_prefix: "test",
        signing_name: "test",
        protocol: Protocol::RestJson,
    };

    const LIST: OperationDescriptor = SERVICE
        .get("ListThings", "/listThings")
        .inputs(&["site", "maxResults", "nextToken", "position.cartesianCoordinates.x"])
        .required(&["site"])
        .outputs(&["things", "nextToken"])
        .select(DefaultSelect::Field("things"));

    #[test]
    fn builder_sets_binding() {
        assert_eq!(LIST.method, HttpMethod::Get);
        assert_eq!(LIST.path, "/listThings");
        assert_eq!(LIST.default_select, DefaultSelect::Field("things"));
        assert!(LIST.confirm_target.is_none());
    }

    #[test]
    fn json_operations_post_to_root() {
        let op = SERVICE.operation("DoThing");
        assert_eq!(op.method, HttpMethod::Post);
        assert_eq!(op.path, "/");
    }

    #[test]
    fn output_field_is_case_insensitive() {
        assert_eq!(LIST.output_field("Things"), Some("things"));
        assert_eq!(LIST.output_field("NEXTTOKEN"), Some("nextToken"));
        assert_eq!(LIST.output_field("missing"), None);
    }

    #[test]
    fn input_param_accepts_nested_roots() {
        assert_eq!(LIST.input_param("Site").as_deref(), Some("site"));
        assert_eq!(LIST.input_param("position").as_deref(), Some("position"));
        assert_eq!(
            LIST.input_param("position.cartesiancoordinates.X").as_deref(),
            Some("position.cartesianCoordinates.x")
        );
        assert_eq!(LIST.input_param("fleet"), None);
    }

    #[test]
    fn qualified_name() {
        assert_eq!(LIST.qualified_name(), "test:ListThings");
    }
}
