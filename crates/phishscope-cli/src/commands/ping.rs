//! Service reachability check.

use anyhow::Result;
use colored::Colorize;
use phishscope_core::{HttpTransport, ServiceConfig};
use std::process::ExitCode;

pub async fn execute(service: &ServiceConfig) -> Result<ExitCode> {
    let transport = HttpTransport::from_config(service);

    if transport.health_check().await {
        println!(
            "{} Classification service reachable at {}",
            "✓".green().bold(),
            transport.base_url().cyan()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Classification service not reachable at {}",
            "✗".red().bold(),
            transport.base_url().cyan()
        );
        println!();
        println!("  Start the prediction service or point {} at it.", "--service-url".bold());
        Ok(ExitCode::FAILURE)
    }
}
