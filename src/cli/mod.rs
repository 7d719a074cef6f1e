//! Command-line surface: one verb-noun subcommand per operation.
//!
//! Each service module turns its flags into the operation's typed input and
//! hands it to the [`Runtime`]. Everything shared across commands (global
//! switches, argument parsers) lives here.

use crate::runtime::Runtime;
use anyhow::{Context, Result};
use awscmd_core::{Envelope, InvocationOptions, Transport};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::Path;

pub mod datapipeline;
pub mod roborunner;
pub mod s3vectors;
pub mod secrets;

#[derive(Debug, Parser)]
#[command(name = "awscmd")]
#[command(version)]
#[command(about = "Verb-noun commands for AWS Secrets Manager, Data Pipeline, IoT RoboRunner and S3 Vectors")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Switches every command accepts.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// What to emit: `*` for the whole response, a response field name, or
    /// `^Param` to echo an input parameter
    #[arg(long, global = true, value_name = "SELECTOR")]
    pub select: Option<String>,

    /// Emit the primary input parameter instead of the response (deprecated,
    /// use --select '^Param')
    #[arg(long, global = true, hide_short_help = true)]
    pub pass_thru: bool,

    /// Skip the confirmation prompt on destructive operations
    #[arg(long, global = true)]
    pub force: bool,

    /// Fetch one page only, even when more are available
    #[arg(long, global = true)]
    pub no_auto_iteration: bool,

    /// Region to send requests to
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Shared-config profile to read region and credentials from
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Send requests to this base URL instead of the regional endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Log the endpoint of each call and other diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn invocation_options(&self) -> InvocationOptions {
        InvocationOptions {
            select: self.select.clone(),
            pass_thru: self.pass_thru,
            force: self.force,
            no_auto_iteration: self.no_auto_iteration,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Secrets(secrets::SecretsCommand),
    #[command(flatten)]
    DataPipeline(datapipeline::DataPipelineCommand),
    #[command(flatten)]
    RoboRunner(roborunner::RoboRunnerCommand),
    #[command(flatten)]
    S3Vectors(s3vectors::S3VectorsCommand),
}

impl Command {
    /// Build the operation input and run it.
    ///
    /// `Err` is reserved for problems reading the arguments themselves
    /// (unreadable files, malformed JSON). Everything from validation onward
    /// comes back as envelopes.
    pub async fn run<T: Transport>(self, runtime: &Runtime<T>) -> Result<Vec<Envelope>> {
        match self {
            Self::Secrets(cmd) => cmd.run(runtime).await,
            Self::DataPipeline(cmd) => cmd.run(runtime).await,
            Self::RoboRunner(cmd) => cmd.run(runtime).await,
            Self::S3Vectors(cmd) => cmd.run(runtime).await,
        }
    }
}

// ── Argument helpers ────────────────────────────────────────────────────

const FILE_PREFIX: &str = "file://";

/// A text argument given inline or as `file://path`.
pub(crate) fn text_arg(raw: String) -> Result<String> {
    match raw.strip_prefix(FILE_PREFIX) {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path)),
        None => Ok(raw),
    }
}

/// A JSON document argument given inline or as `file://path`.
pub(crate) fn json_arg<T: DeserializeOwned>(flag: &str, raw: String) -> Result<T> {
    let text = text_arg(raw)?;
    serde_json::from_str(&text).with_context(|| format!("--{} is not a valid JSON document", flag))
}

pub(crate) fn opt_json_arg<T: DeserializeOwned>(flag: &str, raw: Option<String>) -> Result<Option<T>> {
    raw.map(|raw| json_arg(flag, raw)).transpose()
}

/// Base64 contents of a binary file.
pub(crate) fn blob_arg(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}

/// An RFC 3339 timestamp, or plain epoch seconds, as epoch seconds.
pub(crate) fn timestamp_arg(raw: &str) -> Result<f64> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.timestamp_millis() as f64 / 1000.0);
    }
    raw.parse::<f64>()
        .with_context(|| format!("'{}' is neither an RFC 3339 timestamp nor epoch seconds", raw))
}

/// clap value parser for `Key=Value` pairs.
pub(crate) fn key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected Key=Value, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "awscmd",
            "Get-SECSecretValue",
            "--secret-id",
            "prod/db",
            "--select",
            "*",
            "--region",
            "eu-west-1",
        ])
        .unwrap();
        assert_eq!(cli.global.select.as_deref(), Some("*"));
        assert_eq!(cli.global.region.as_deref(), Some("eu-west-1"));
        assert!(matches!(cli.command, Command::Secrets(_)));
    }

    #[test]
    fn key_value_pairs() {
        assert_eq!(key_value("env=prod"), Ok(("env".into(), "prod".into())));
        assert_eq!(key_value("k=a=b"), Ok(("k".into(), "a=b".into())));
        assert!(key_value("novalue").is_err());
        assert!(key_value("=v").is_err());
    }

    #[test]
    fn timestamps_accept_rfc3339_and_epoch() {
        assert_eq!(timestamp_arg("2024-01-01T00:00:00Z").unwrap(), 1704067200.0);
        assert_eq!(timestamp_arg("1704067200.5").unwrap(), 1704067200.5);
        assert!(timestamp_arg("yesterday").is_err());
    }

    #[test]
    fn json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": [1, 2]}}"#).unwrap();
        let raw = format!("file://{}", file.path().display());
        let value: serde_json::Value = json_arg("doc", raw).unwrap();
        assert_eq!(value["a"][1], 2);
    }

    #[test]
    fn malformed_json_names_the_flag() {
        let err = json_arg::<serde_json::Value>("filter", "{not json".into()).unwrap_err();
        assert!(err.to_string().contains("--filter"));
    }

    #[test]
    fn blobs_are_base64() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(blob_arg(file.path()).unwrap(), "3q2+7w==");
    }
}
