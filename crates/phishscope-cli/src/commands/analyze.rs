//! URL and email analysis commands.

use anyhow::{Context, Result};
use clap::Args;
use phishscope_core::{Dispatcher, HttpTransport, InputKind, ServiceConfig};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::output::{self, TerminalNotifier};

#[derive(Args)]
pub struct UrlArgs {
    /// URL to check
    pub url: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EmailArgs {
    /// Email text to check (reads stdin when omitted)
    pub text: Option<String>,

    /// Read the email text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute_url(args: UrlArgs, service: &ServiceConfig) -> Result<ExitCode> {
    run(InputKind::Url, &args.url, args.json, service).await
}

pub async fn execute_email(args: EmailArgs, service: &ServiceConfig) -> Result<ExitCode> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read email text from stdin")?;
            buf
        }
    };

    run(InputKind::Email, &text, args.json, service).await
}

/// Submit once and render the outcome.
///
/// Failures have already been reported by the notifier, so they only turn
/// into a non-zero exit code here.
async fn run(kind: InputKind, input: &str, json: bool, service: &ServiceConfig) -> Result<ExitCode> {
    let dispatcher = Dispatcher::new(HttpTransport::from_config(service), TerminalNotifier::new())
        .with_label_policy(service.label_policy);

    match dispatcher.submit(kind, input).await {
        Ok(result) => {
            if json {
                output::print_result_json(&result)?;
            } else {
                output::print_result(&result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
