//! Progress notification port
//!
//! Defines the interface for reporting progress while facts are resolved.

use crate::config::SourceStep;
use facts_domain::FactBatch;

/// Callback for progress updates during resolution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ResolveProgressNotifier: Send + Sync {
    /// Called before a step of the fallback chain is tried
    fn on_step_start(&self, step: SourceStep, country: &str);

    /// Called when a step falls through to the next one
    fn on_step_skipped(&self, _step: SourceStep, _reason: &str) {}

    /// Called once a batch has been resolved
    fn on_resolved(&self, batch: &FactBatch);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolveProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: SourceStep, _country: &str) {}
    fn on_resolved(&self, _batch: &FactBatch) {}
}
