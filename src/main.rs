//! pagescope main entry point
//!
//! This is the command-line interface for the pagescope page analyzer.

use clap::Parser;
use pagescope::config::load_settings;
use pagescope::output::{print_result, write_markdown_report};
use pagescope::PageScopeError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// pagescope: analyze a single web page
///
/// Fetches the given URL once and reports its title, doctype, heading
/// counts, whether it has a login form, and a breakdown of its links.
#[derive(Parser, Debug)]
#[command(name = "pagescope")]
#[command(version)]
#[command(about = "Analyze a single web page", long_about = None)]
struct Cli {
    /// URL to analyze (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Also write a markdown report to this path
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(PageScopeError::Url(e)) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads settings, analyzes the page and writes the reports
///
/// Returns whether the fetch succeeded.
async fn run(cli: &Cli) -> pagescope::Result<bool> {
    let config = load_settings(cli.config.as_deref(), cli.timeout)?;

    let result = pagescope::analyze(&cli.url, &config.fetch).await?;
    print_result(&result);

    if let Some(path) = &cli.report {
        write_markdown_report(&result, path)?;
        tracing::info!("Report written to: {}", path.display());
    }

    Ok(result.success)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagescope=info,warn"),
            1 => EnvFilter::new("pagescope=debug,info"),
            2 => EnvFilter::new("pagescope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
