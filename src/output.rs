//! Writing envelopes to the terminal.
//!
//! Values go to stdout, one item per line: arrays are enumerated, strings
//! are printed raw, anything else as compact JSON. Notes and errors go to
//! stderr.

use awscmd_core::Envelope;
use serde_json::Value;
use std::io::{self, Write};

/// What was written for a batch of envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub items: usize,
    pub errors: usize,
}

impl Summary {
    pub fn failed(&self) -> bool {
        self.errors > 0
    }
}

/// The lines a single projected value prints as.
pub fn render(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(render_item).collect(),
        other => vec![render_item(other)],
    }
}

fn render_item(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn write_envelopes<O, E>(out: &mut O, err: &mut E, envelopes: &[Envelope]) -> io::Result<Summary>
where
    O: Write,
    E: Write,
{
    let mut summary = Summary::default();
    for envelope in envelopes {
        match &envelope.result {
            Ok(Some(value)) => {
                for line in render(value) {
                    writeln!(out, "{}", line)?;
                    summary.items += 1;
                }
            }
            Ok(None) => {}
            Err(error) => {
                writeln!(err, "error: {}", error)?;
                summary.errors += 1;
            }
        }
        if let Some(note) = &envelope.note {
            writeln!(err, "{}", note)?;
        }
    }
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::{InvokeError, ServiceError};
    use serde_json::json;

    #[test]
    fn arrays_enumerate_and_strings_print_raw() {
        assert_eq!(
            render(&json!(["a", {"k": 1}, 3])),
            vec!["a".to_string(), r#"{"k":1}"#.to_string(), "3".to_string()]
        );
        assert_eq!(render(&json!("plain")), vec!["plain".to_string()]);
    }

    #[test]
    fn nested_arrays_stay_whole() {
        assert_eq!(render(&json!([[1, 2]])), vec!["[1,2]".to_string()]);
    }

    #[test]
    fn errors_and_notes_go_to_stderr() {
        let envelopes = vec![
            Envelope::ok(Some(json!(["x", "y"]))).with_note("More results are available"),
            Envelope::ok(None),
            Envelope::failed(InvokeError::Transport(ServiceError::new(
                "secretsmanager",
                "ResourceNotFoundException",
                "Secrets Manager can't find the specified secret.",
                400,
            ))),
        ];
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = write_envelopes(&mut out, &mut err, &envelopes).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "x\ny\n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("More results are available"));
        assert!(err.contains("ResourceNotFoundException"));
        assert_eq!(summary, Summary { items: 2, errors: 1 });
        assert!(summary.failed());
    }
}
