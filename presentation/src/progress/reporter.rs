//! Progress reporting for fact resolution

use colored::Colorize;
use facts_application::{ResolveProgressNotifier, SourceStep};
use facts_domain::FactBatch;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

fn step_display_name(step: SourceStep) -> &'static str {
    match step {
        SourceStep::Curated => "Curated table",
        SourceStep::Remote => "Remote model",
        SourceStep::Template => "Template synthesis",
    }
}

/// Reports resolution progress with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: SourceStep, country: &str) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(country.to_string());
        pb.set_message(format!("{}...", step_display_name(step)));
    }

    fn on_step_skipped(&self, step: SourceStep, reason: &str) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(format!("{} {} ({})", "x".red(), step_display_name(step), reason));
        }
    }

    fn on_resolved(&self, _batch: &FactBatch) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ResolveProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: SourceStep, country: &str) {
        eprintln!("{} {} for {}", "->".cyan(), step_display_name(step).bold(), country);
    }

    fn on_step_skipped(&self, step: SourceStep, reason: &str) {
        eprintln!("  {} {} ({})", "x".red(), step_display_name(step), reason);
    }

    fn on_resolved(&self, batch: &FactBatch) {
        eprintln!("  {} {} facts from {}", "v".green(), batch.len(), batch.source.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_domain::FactSource;

    #[test]
    fn test_reporter_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_step_start(SourceStep::Curated, "Peru");
        reporter.on_step_skipped(SourceStep::Curated, "not curated");
        reporter.on_step_start(SourceStep::Template, "Peru");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_resolved(&FactBatch::new("Peru", Vec::new(), FactSource::Template));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
