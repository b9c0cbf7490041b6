//! Progress reporting for outbound requests

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scout_application::ports::progress::ProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a request is in flight
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn operation_display_name(operation: &str) -> &str {
        match operation {
            "search" => "Searching",
            "fetch" => "Fetching",
            other => other,
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, operation: &str, target: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::operation_display_name(operation).to_string());
        pb.set_message(target.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_request_complete(&self, operation: &str, success: bool) {
        let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let status = if success {
            format!("{} {} done", "v".green(), operation)
        } else {
            format!("{} {} failed", "x".red(), operation)
        };
        pb.finish_with_message(status);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, operation: &str, target: &str) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            SpinnerProgress::operation_display_name(operation).bold(),
            target
        );
    }

    fn on_request_complete(&self, operation: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), operation);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), operation);
        }
    }
}
