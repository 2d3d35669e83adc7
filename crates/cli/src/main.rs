//! RouteDemo CLI - Main Entry Point
//!
//! Drives demo requests against the endpoint service and prints the
//! measured round trip plus the driver's log feed.

use clap::{Parser, Subcommand};
use colored::Colorize;

use routedemo_cli::driver::{DemoDriver, FetchOutcome};
use routedemo_cli::output::{self, OutputFormat};
use routedemo_common::endpoint::{catalog, find_endpoint};

/// RouteDemo CLI - demo endpoint client
#[derive(Parser)]
#[command(name = "routedemo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Endpoint service base URL
    #[arg(long, default_value = "http://127.0.0.1:8080", global = true)]
    base_url: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch from a demo endpoint and print the measured round trip
    Fetch {
        /// Endpoint id from the catalog (e.g. "native", "hono")
        endpoint_id: String,
    },

    /// List the endpoint catalog
    Endpoints,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fetch { endpoint_id } => {
            let endpoint = find_endpoint(&endpoint_id)?;
            let driver = DemoDriver::new(cli.base_url.clone());

            match driver.fetch_and_record(&endpoint).await {
                FetchOutcome::Completed(record) => {
                    output::print_item(&record, cli.format);
                }
                FetchOutcome::Failed(err) => {
                    eprintln!("{} {}", "error:".red().bold(), err);
                }
                FetchOutcome::Ignored => {
                    eprintln!("{}", "a request is already in flight".yellow());
                }
            }

            for line in driver.logs().await {
                if line.starts_with("[ERROR]") {
                    println!("{}", line.red());
                } else {
                    println!("{}", line.dimmed());
                }
            }
        }
        Commands::Endpoints => {
            output::print_list(&catalog(), cli.format);
        }
        Commands::Version => {
            println!("routedemo {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
