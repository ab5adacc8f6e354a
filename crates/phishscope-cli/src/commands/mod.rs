//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;

pub mod analyze;
pub mod config;
pub mod ping;

/// PhishScope - phishing verdicts for URLs and email content
#[derive(Parser)]
#[command(name = "phishscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file (defaults to <config dir>/phishscope/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Classification service base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a URL
    Url(analyze::UrlArgs),

    /// Check email content
    Email(analyze::EmailArgs),

    /// Check that the classification service is reachable
    Ping,

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

/// Effective configuration: file, then environment, then flags.
pub fn resolve_config(config_file: Option<&Path>, service_url: Option<String>) -> Result<Config> {
    let mut config = Config::load(config_file)?.merge_with_env();
    if let Some(url) = service_url {
        config.service.base_url = url;
    }
    Ok(config)
}

impl Cli {
    pub async fn execute(self) -> Result<ExitCode> {
        let Cli {
            config: config_file,
            service_url,
            command,
            ..
        } = self;
        let config_file = config_file.as_deref();

        match command {
            Commands::Url(args) => {
                let config = resolve_config(config_file, service_url)?;
                analyze::execute_url(args, &config.service).await
            }
            Commands::Email(args) => {
                let config = resolve_config(config_file, service_url)?;
                analyze::execute_email(args, &config.service).await
            }
            Commands::Ping => {
                let config = resolve_config(config_file, service_url)?;
                ping::execute(&config.service).await
            }
            Commands::Config(cmd) => config::execute(cmd, config_file, service_url).await,
        }
    }
}
