//! Terminal output formatting.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use phishscope_core::{AnalysisResult, InputKind, Notifier};
use std::sync::Mutex;
use std::time::Duration;

/// Widest the confidence bar gets, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Shows a spinner while a request is in flight and prints alerts to stderr.
pub struct TerminalNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn loading(&self, _kind: InputKind, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "{} {}",
            message.bold(),
            "Our AI is scanning the features...".dimmed()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }

    fn alert(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    fn resolved(&self, _result: &AnalysisResult) {
        self.clear_spinner();
    }
}

/// Print a verdict card.
pub fn print_result(result: &AnalysisResult) {
    let headline = if result.is_phishing() {
        result.headline().red().bold()
    } else {
        result.headline().green().bold()
    };

    let bar = confidence_bar(result.confidence_percent, bar_width());
    let bar = if result.is_phishing() {
        bar.red()
    } else {
        bar.green()
    };

    println!();
    println!("  {}", headline);
    println!();
    println!("  {}", result.summary());
    println!("  {} {}", bar, format!("{:.1}%", result.confidence_percent).dimmed());
    println!();
    println!("  {}", "Why".bold());
    println!("  {}", result.rationale);
    println!();
}

/// Print a verdict as JSON on stdout.
pub fn print_result_json(result: &AnalysisResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Bar width that fits the terminal, defaulting to 80 columns.
fn bar_width() -> usize {
    let columns = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    columns.saturating_sub(12).clamp(10, MAX_BAR_WIDTH)
}

/// Render `percent` (0..=100) as a fixed-width bar.
fn confidence_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
