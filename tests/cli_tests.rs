mod common;

use awscmd::cli::Cli;
use awscmd::output::write_envelopes;
use awscmd::runtime::Runtime;
use awscmd_core::CancellationToken;
use clap::Parser;
use common::ScriptedTransport;
use serde_json::json;
use std::sync::Arc;

async fn run_command(
    args: &[&str],
    transport: Arc<ScriptedTransport>,
) -> (String, String, awscmd::output::Summary) {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let runtime = Runtime::new(
        transport,
        cli.global.invocation_options(),
        CancellationToken::new(),
    )
    .with_confirm(|_, _| false);
    let envelopes = cli.command.run(&runtime).await.expect("command should build");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = write_envelopes(&mut out, &mut err, &envelopes).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        summary,
    )
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["awscmd", "Get-SECNothing"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "awscmd",
        "Get-ROBOWorkerList",
        "--site",
        "s1",
        "--no-auto-iteration",
        "--endpoint-url",
        "http://localhost:4566",
    ])
    .unwrap();
    assert!(cli.global.no_auto_iteration);
    assert_eq!(cli.global.endpoint_url.as_deref(), Some("http://localhost:4566"));
}

#[tokio::test]
async fn test_get_secret_value_prints_secret_string() {
    let transport = ScriptedTransport::ok(vec![json!({
        "Name": "prod/db",
        "SecretString": "hunter2"
    })]);
    let (out, err, summary) = run_command(
        &["awscmd", "Get-SECSecretValue", "--secret-id", "prod/db", "--select", "SecretString"],
        transport.clone(),
    )
    .await;

    assert_eq!(out, "hunter2\n");
    assert!(err.is_empty());
    assert!(!summary.failed());
    let request = &transport.requests()[0];
    assert_eq!(request.headers["x-amz-target"], "secretsmanager.GetSecretValue");
    assert_eq!(transport.body(0), json!({"SecretId": "prod/db"}));
}

#[tokio::test]
async fn test_missing_required_flag_reports_error() {
    let transport = ScriptedTransport::ok(vec![]);
    let (out, err, summary) = run_command(&["awscmd", "Get-SECSecretValue"], transport.clone()).await;

    assert!(out.is_empty());
    assert!(err.contains("SecretId"));
    assert!(summary.failed());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_remove_without_force_is_declined() {
    let transport = ScriptedTransport::ok(vec![json!({})]);
    let (out, _, summary) =
        run_command(&["awscmd", "Remove-SECSecret", "--secret-id", "prod/db"], transport.clone())
            .await;

    assert!(out.is_empty());
    assert!(!summary.failed());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_remove_with_force_is_sent() {
    let transport = ScriptedTransport::ok(vec![json!({"Name": "prod/db"})]);
    let (_, _, summary) = run_command(
        &["awscmd", "Remove-SECSecret", "--secret-id", "prod/db", "--force"],
        transport.clone(),
    )
    .await;

    assert!(!summary.failed());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_new_worker_sends_nested_position() {
    let transport = ScriptedTransport::ok(vec![json!({
        "arn": "arn:aws:iotroborunner:us-east-1:123456789012:worker/w1",
        "id": "w1"
    })]);
    let (out, _, _) = run_command(
        &[
            "awscmd",
            "New-ROBOWorker",
            "--name",
            "bot",
            "--fleet",
            "f1",
            "--vendor-properties.vendor-worker-id",
            "v-1",
            "--position.cartesian-coordinates.x",
            "-1.5",
            "--position.cartesian-coordinates.y",
            "2",
            "--select",
            "id",
        ],
        transport.clone(),
    )
    .await;

    assert_eq!(out, "w1\n");
    let body = transport.body(0);
    assert_eq!(body["position"]["cartesianCoordinates"]["x"], json!(-1.5));
    assert_eq!(body["vendorProperties"]["vendorWorkerId"], "v-1");
    assert!(body.get("orientation").is_none());
    assert!(body["clientToken"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_list_workers_prints_each_worker() {
    let transport = ScriptedTransport::ok(vec![
        json!({"workers": [{"id": "w1"}], "nextToken": "abc"}),
        json!({"workers": [{"id": "w2"}]}),
    ]);
    let (out, _, summary) = run_command(
        &["awscmd", "Get-ROBOWorkerList", "--site", "s1", "--fleet", "f1"],
        transport.clone(),
    )
    .await;

    assert_eq!(summary.items, 2);
    assert_eq!(out.lines().count(), 2);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_pipeline_list_marker_alias() {
    let transport = ScriptedTransport::ok(vec![json!({
        "pipelineIdList": [{"id": "df-1", "name": "nightly"}],
        "marker": "m2",
        "hasMoreResults": true
    })]);
    let (_, err, _) = run_command(
        &["awscmd", "Get-DPPipelineList", "--next-token", "m1"],
        transport.clone(),
    )
    .await;

    assert_eq!(transport.calls(), 1);
    assert_eq!(transport.body(0), json!({"marker": "m1"}));
    assert!(err.contains("--next-token m2"));
}

#[tokio::test]
async fn test_query_vectors_sends_vector_and_filter() {
    let transport = ScriptedTransport::ok(vec![json!({
        "vectors": [{"key": "k1", "distance": 0.1}],
        "distanceMetric": "cosine"
    })]);
    let (_, _, summary) = run_command(
        &[
            "awscmd",
            "Search-S3VVector",
            "--vector-bucket-name",
            "media",
            "--index-name",
            "songs",
            "--top-k",
            "5",
            "--query-vector",
            "0.5,-0.25,1",
            "--filter",
            r#"{"genre": "jazz"}"#,
        ],
        transport.clone(),
    )
    .await;

    assert_eq!(summary.items, 1);
    let request = &transport.requests()[0];
    assert_eq!(request.path, "/QueryVectors");
    let body = transport.body(0);
    assert_eq!(body["queryVector"], json!({"float32": [0.5, -0.25, 1.0]}));
    assert_eq!(body["filter"], json!({"genre": "jazz"}));
    assert_eq!(body["topK"], 5);
}

#[tokio::test]
async fn test_malformed_json_argument_is_an_error() {
    let cli = Cli::try_parse_from([
        "awscmd",
        "Write-S3VVector",
        "--vector-bucket-name",
        "media",
        "--index-name",
        "songs",
        "--vectors",
        "[{not json",
    ])
    .unwrap();
    let runtime = Runtime::new(
        ScriptedTransport::ok(vec![]),
        cli.global.invocation_options(),
        CancellationToken::new(),
    );
    let err = cli.command.run(&runtime).await.unwrap_err();
    assert!(err.to_string().contains("--vectors"));
}
