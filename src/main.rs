use awscmd::cli::Cli;
use awscmd::output;
use awscmd::runtime::Runtime;
use awscmd::settings;
use awscmd_aws::AwsClient;
use awscmd_core::CancellationToken;
use clap::Parser;
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(summary) if !summary.failed() => ExitCode::SUCCESS,
        Ok(summary) => {
            tracing::debug!(errors = summary.errors, items = summary.items, "finished with errors");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<output::Summary> {
    let config = settings::load(&cli.global)?;
    let client = AwsClient::new(config);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, abandoning in-flight request");
            on_interrupt.cancel();
        }
    });

    let runtime = Runtime::new(client, cli.global.invocation_options(), cancel);
    let envelopes = cli.command.run(&runtime).await?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = output::write_envelopes(&mut stdout.lock(), &mut stderr.lock(), &envelopes)?;
    Ok(summary)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });

    // Also installs the `log` bridge, so `log::` records from the library
    // crates end up here.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
