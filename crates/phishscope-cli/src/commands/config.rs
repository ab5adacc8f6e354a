//! Configuration commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (file, environment and flags applied)
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    service_url: Option<String>,
) -> Result<ExitCode> {
    match cmd {
        ConfigCommands::Show => {
            let config = super::resolve_config(config_file, service_url)?;
            print!("{}", config.to_toml()?);
        }

        ConfigCommands::Path => {
            let path = match config_file {
                Some(path) => path.to_path_buf(),
                None => Config::default_path()?,
            };
            println!("{}", path.display());
        }

        ConfigCommands::Init { force } => {
            let path = match config_file {
                Some(path) => path.to_path_buf(),
                None => Config::default_path()?,
            };

            if path.exists() && !force {
                println!(
                    "{} Config file already exists: {}",
                    "!".yellow().bold(),
                    path.display()
                );
                println!("  Use {} to overwrite it.", "--force".bold());
                return Ok(ExitCode::FAILURE);
            }

            Config::default().save(&path)?;
            println!(
                "{} Wrote default config to {}",
                "✓".green().bold(),
                path.display().to_string().cyan()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
