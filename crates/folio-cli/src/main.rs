//! Folio - show a portfolio's featured GitHub repositories with live metadata.
//!
//! Reads the profile configuration, fetches every featured repository
//! through the in-memory cache, and prints the results. With `--watch` the
//! batch is repeated on an interval, reusing cached entries while they are
//! fresh and falling back to stale ones when GitHub is unreachable.

mod args;
mod render;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::Utc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_core::models::RepoList;
use folio_core::{BatchReport, Config, FetchService};

use args::{CliArgs, USAGE};
use render::{render_result, render_summary, StderrNotifier};

/// Environment variable naming an additional log file
const LOG_FILE_ENV: &str = "FOLIO_LOG_FILE";

/// Initialize the tracing subscriber for logging.
///
/// Returns the worker guard of the file writer, which must be held until
/// exit so buffered lines are flushed.
fn init_tracing() -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=folio_core=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from) {
        Some(path) => match path.file_name() {
            Some(file_name) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let appender = tracing_appender::rolling::never(dir, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                (
                    Some(fmt::layer().with_writer(writer).with_ansi(false)),
                    Some(guard),
                )
            }
            None => (None, None),
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let _log_guard = init_tracing();
    info!("Folio starting");

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env();

    let token = config.auth_token()?;
    let service = FetchService::from_config(&config)?;
    // Hand-edited lists may carry blanks or duplicates
    let repos = service.commit_repo_list(RepoList::from_names(&config.featured_repos));
    let notifier = StderrNotifier;
    let color = io::stdout().is_terminal() && !args.json;

    loop {
        let outcome = service
            .fetch_all(config.github.as_deref(), &repos, token.as_ref())
            .await;
        let report = BatchReport::from_outcome(&outcome);
        report.notify(&notifier);

        if let Ok(result) = &outcome {
            if args.json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else if !result.succeeded.is_empty() {
                println!("{}", render_result(result, Utc::now(), color));
                println!("\n{}", render_summary(result));
            }
        }

        let error = report.error_message();
        match args.watch {
            Some(interval) => {
                if let Some(message) = error {
                    eprintln!("{}", message);
                }
                tokio::time::sleep(interval).await;
            }
            None => {
                if let Some(message) = error {
                    return Err(anyhow!(message));
                }
                break;
            }
        }
    }

    info!("Folio shutting down");
    Ok(())
}
