//! Storefront CLI - register, log in and browse the catalog from a terminal

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use std::path::PathBuf;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront client for the Auth and Catalog APIs")]
#[command(version)]
struct Cli {
    /// Set logging level (overrides the configuration file)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<LogLevel>,

    /// State directory holding config/ and data/ (token storage)
    #[arg(short = 'd', long, global = true, env = "STOREFRONT_STATE_DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// API origin, e.g. https://shop.example.com
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(short = 't', long, global = true)]
    timeout: Option<u64>,

    /// Send form confirmations to the log instead of stdout
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::resolve(&cli)?;
    storefront_core::logging::init_tracing(&settings.logging)?;
    debug!(base_url = %settings.api.base_url, "Configuration loaded");

    let context = commands::Context::new(&settings, cli.data_dir.clone(), cli.quiet)?;
    if let Err(e) = cli.command.execute(&context).await {
        error!("Command failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}
