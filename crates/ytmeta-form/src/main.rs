//! Terminal front end for the video analysis form.
//!
//! Each argument is one submission. Without arguments, each stdin line is
//! one submission until EOF or Ctrl-C.

use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ytmeta_client::AnalyzeClient;
use ytmeta_form::{FormConfig, SubmissionHandler, SubmitOutcome};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Install rustls crypto provider (required for rustls 0.23+)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        eprintln!("rustls crypto provider already installed");
    }

    init_tracing();

    info!("Starting ytmeta");

    let client = match AnalyzeClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create analysis client: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Client config: endpoint={}, timeout={:?}",
        client.config().endpoint,
        client.config().timeout
    );

    let handler = SubmissionHandler::new(client, FormConfig::from_env());

    // One signal future for the whole run, so Ctrl-C also interrupts a
    // submission that is in flight.
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let last = if args.is_empty() {
        run_interactive(&handler, shutdown.as_mut()).await
    } else {
        let mut last = None;
        for input in &args {
            match submit_until_shutdown(&handler, input, shutdown.as_mut()).await {
                Some(outcome) => last = Some(outcome),
                None => break,
            }
        }
        last
    };

    let code = match last {
        Some(outcome) if outcome.is_rendered() => 0,
        _ => 1,
    };
    std::process::exit(code);
}

/// Text output for development, JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let mut env_filter = EnvFilter::from_default_env();
    if let Ok(directive) = "ytmeta=info".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    // Logs go to stderr so stdout carries only the rendered view.
    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

async fn run_interactive<S>(
    handler: &SubmissionHandler<AnalyzeClient>,
    mut shutdown: Pin<&mut S>,
) -> Option<SubmitOutcome>
where
    S: Future<Output = std::io::Result<()>>,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last = None;

    loop {
        let input = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(input)) => input,
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            },
            _ = shutdown.as_mut() => {
                info!("Received shutdown signal");
                break;
            }
        };

        match submit_until_shutdown(handler, &input, shutdown.as_mut()).await {
            Some(outcome) => last = Some(outcome),
            None => break,
        }
    }

    last
}

/// Submit and print the view; `None` if Ctrl-C arrived first.
async fn submit_until_shutdown<S>(
    handler: &SubmissionHandler<AnalyzeClient>,
    input: &str,
    shutdown: Pin<&mut S>,
) -> Option<SubmitOutcome>
where
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        outcome = handler.submit(input) => {
            println!("{}", handler.snapshot());
            Some(outcome)
        }
        _ = shutdown => {
            info!("Received shutdown signal, abandoning submission");
            None
        }
    }
}
