//! Command line entry point for the Punch Payroll Engine.
//!
//! `punch-payroll calculate [PATH]` loads a JSONC or YAML payroll file and
//! prints the report as indented JSON on stdout. `punch-payroll serve` runs
//! the HTTP API. Logs go to stderr and honour `RUST_LOG`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use punch_payroll::api::create_router;
use punch_payroll::calculation::calculate_payroll;
use punch_payroll::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "punch-payroll", version, about = "Payroll totals from time punches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate payroll for a punch file and print the report.
    Calculate {
        /// Payroll file (.jsonc/.json, or .yaml/.yml).
        #[arg(default_value = "PunchLogicTest.jsonc")]
        path: PathBuf,
    },
    /// Serve the payroll HTTP API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Calculate { path } => {
            let loader = ConfigLoader::load(&path)
                .with_context(|| format!("loading payroll file {}", path.display()))?;
            let report = calculate_payroll(loader.input())
                .with_context(|| format!("calculating payroll for {}", path.display()))?;
            println!("{}", report.to_pretty_json()?);
        }
        Command::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("binding {}", bind))?;
            info!(%bind, "punch-payroll API listening");
            axum::serve(listener, create_router()).await?;
        }
    }

    Ok(())
}
