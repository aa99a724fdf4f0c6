//! Resolve Facts use case.
//!
//! Walks the fact-source fallback chain for a country name:
//!
//! 1. [`SourceStep::Curated`]: static table, no network
//! 2. [`SourceStep::Remote`]: remote generator, normalized via
//!    [`facts_domain::fact::normalize`]
//! 3. [`SourceStep::Template`]: template synthesis, cannot fail
//!
//! The first step that yields facts wins. Remote failures of any kind
//! (network, HTTP status, malformed body, no usable facts) are logged and
//! demoted to a fallthrough; they never reach the caller.

use crate::config::{ResolverConfig, SourceStep};
use crate::ports::fact_source::{RemoteFactSource, SourceError};
use crate::ports::progress::{NoProgress, ResolveProgressNotifier};
use facts_domain::fact::normalize;
use facts_domain::{
    CountryQuery, CuratedTable, DomainError, FactBatch, FactSource, NormalizeError,
    TemplateSynthesizer,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by the resolver (only invalid input)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Why a single step fell through
#[derive(Error, Debug)]
enum StepFailure {
    #[error("country not in curated table")]
    NotCurated,

    #[error("no remote source configured")]
    NoRemote,

    #[error("remote source failed: {0}")]
    Source(#[from] SourceError),

    #[error("remote response unusable: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Use case for resolving facts about a country.
#[derive(Clone)]
pub struct ResolveFactsUseCase {
    curated: CuratedTable,
    remote: Option<Arc<dyn RemoteFactSource>>,
    synthesizer: TemplateSynthesizer,
    config: ResolverConfig,
}

impl ResolveFactsUseCase {
    pub fn new(synthesizer: TemplateSynthesizer) -> Self {
        Self {
            curated: CuratedTable::new(),
            remote: None,
            synthesizer,
            config: ResolverConfig::default(),
        }
    }

    /// Attach a remote fact source.
    pub fn with_remote(mut self, remote: Arc<dyn RemoteFactSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Override the fallback order.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Name of the configured remote source, if any
    pub fn remote_name(&self) -> Option<&str> {
        self.remote.as_deref().map(|r| r.name())
    }

    /// Resolve facts without progress reporting.
    pub async fn execute(&self, country: &str) -> Result<FactBatch, ResolveError> {
        self.execute_with_progress(country, &NoProgress).await
    }

    /// Resolve facts, reporting each step to `progress`.
    ///
    /// Never returns an empty batch. The only error is empty input.
    pub async fn execute_with_progress(
        &self,
        country: &str,
        progress: &dyn ResolveProgressNotifier,
    ) -> Result<FactBatch, ResolveError> {
        let query = CountryQuery::parse(country)?;
        info!("Resolving facts for {}", query);

        for step in self.config.effective_order() {
            progress.on_step_start(step, query.display());
            match self.attempt(step, &query).await {
                Ok(batch) => {
                    info!(
                        "Resolved {} facts for {} via {} ({})",
                        batch.len(),
                        query,
                        step,
                        batch.source
                    );
                    progress.on_resolved(&batch);
                    return Ok(batch);
                }
                Err(failure) => {
                    match &failure {
                        StepFailure::Source(_) | StepFailure::Normalize(_) => {
                            warn!("{} step failed for {}: {}", step, query, failure)
                        }
                        _ => debug!("{} step skipped for {}: {}", step, query, failure),
                    }
                    progress.on_step_skipped(step, &failure.to_string());
                }
            }
        }

        // effective_order always ends with the template step
        let batch = self.synthesize(&query);
        progress.on_resolved(&batch);
        Ok(batch)
    }

    async fn attempt(&self, step: SourceStep, query: &CountryQuery) -> Result<FactBatch, StepFailure> {
        match step {
            SourceStep::Curated => self
                .curated
                .lookup(query)
                .filter(|facts| !facts.is_empty())
                .map(|facts| FactBatch::new(query.display(), facts, FactSource::Curated))
                .ok_or(StepFailure::NotCurated),
            SourceStep::Remote => {
                let remote = self.remote.as_ref().ok_or(StepFailure::NoRemote)?;
                let fetched = remote.fetch_facts(query).await?;
                let facts = normalize::normalize(&fetched.raw, query.display())?;
                let model = fetched
                    .model_used
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| remote.name().to_string());
                Ok(FactBatch::new(
                    query.display(),
                    facts,
                    FactSource::Remote { model },
                ))
            }
            SourceStep::Template => Ok(self.synthesize(query)),
        }
    }

    fn synthesize(&self, query: &CountryQuery) -> FactBatch {
        FactBatch::new(
            query.display(),
            self.synthesizer.synthesize(query),
            FactSource::Template,
        )
    }
}
