#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod calc;
mod config;
mod logging;
mod server;
mod signals;
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::calc::CalcOp;
use crate::config::AppConfig;

/// hello-server - calculator API and demo endpoints
#[derive(Parser)]
#[command(name = "hello-server")]
#[command(about = "hello-server - calculator API and demo endpoints")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Run a single calculator operation and print the result
    Calc {
        #[command(subcommand)]
        op: CalcOp,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port)?;
    config.validate()?;

    logging::init_logging(&config.logging, cli.verbose)?;
    tracing::debug!("hello-server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => server::run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Calc { op } => run_calc(op),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

fn run_calc(op: CalcOp) -> Result<()> {
    let client = calculator::local_client(Arc::new(calculator::Service::new()));
    let output = calc::execute(client.as_ref(), op)?;
    println!("{output}");
    Ok(())
}
