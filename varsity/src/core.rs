use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use varsity_core::{SportsSource, VarsityError};
use varsity_types::{Category, SourceKey, Sport, VarsityConfig};

/// Orchestrator that resolves requests down per-(sport, category) source
/// chains.
pub struct Varsity {
    pub(crate) sources: Vec<Arc<dyn SportsSource>>,
    pub(crate) cfg: VarsityConfig,
}

impl std::fmt::Debug for Varsity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Varsity")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a [`Varsity`] engine with custom configuration.
pub struct VarsityBuilder {
    sources: Vec<Arc<dyn SportsSource>>,
    cfg: VarsityConfig,
}

impl Default for VarsityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VarsityBuilder {
    /// Create a new builder with the default chain table and timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: VarsityConfig::default(),
        }
    }

    /// Register a source. Registration order doubles as the fallback order
    /// for any `(sport, category)` without a configured chain.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SportsSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Override the chain for one `(sport, category)` using source
    /// instances, avoiding stringly-typed keys.
    #[must_use]
    pub fn chain(
        mut self,
        sport: Sport,
        category: Category,
        sources_desc: &[Arc<dyn SportsSource>],
    ) -> Self {
        let keys: Vec<SourceKey> = sources_desc.iter().map(|s| s.key()).collect();
        self.cfg.chains.set(sport, category, keys);
        self
    }

    /// Override the chain for one `(sport, category)` by key.
    #[must_use]
    pub fn chain_keys(mut self, sport: Sport, category: Category, keys: &[SourceKey]) -> Self {
        self.cfg.chains.set(sport, category, keys.to_vec());
        self
    }

    /// Set the per-source call timeout.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set the default recent-games lookback window, in days.
    #[must_use]
    pub const fn lookback_days(mut self, days: u32) -> Self {
        self.cfg.lookback_days = days;
        self
    }

    /// Build the engine.
    ///
    /// Chain entries naming unregistered sources are dropped and duplicate
    /// entries removed, so a chain can reference the full provider set
    /// while only a subset is registered.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered.
    pub fn build(mut self) -> Result<Varsity, VarsityError> {
        let known: HashSet<&'static str> = self.sources.iter().map(|s| s.name()).collect();
        for chain in self.cfg.chains.chains_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            chain.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        if self.sources.is_empty() {
            return Err(VarsityError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        Ok(Varsity {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

/// Tag an untagged error with the source that produced it.
pub(crate) fn tag_err(source_name: &str, e: VarsityError) -> VarsityError {
    match e {
        e @ (VarsityError::Source { .. }
        | VarsityError::Empty { .. }
        | VarsityError::SourceTimeout { .. }
        | VarsityError::AllSourcesFailed(_)) => e,
        other => VarsityError::source(source_name, other.to_string()),
    }
}

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Monotonic id correlating all log events of one resolution.
pub(crate) fn next_request_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

impl Varsity {
    /// Start building a new engine.
    #[must_use]
    pub fn builder() -> VarsityBuilder {
        VarsityBuilder::new()
    }

    /// The registered sources for a `(sport, category)`, in priority order.
    ///
    /// The configured chain dominates. When it resolves to nothing (no
    /// entry, or none of its keys are registered), registration order is
    /// the fallback so a mock-only setup still routes.
    pub(crate) fn chain_for(&self, sport: Sport, category: Category) -> Vec<Arc<dyn SportsSource>> {
        if let Some(keys) = self.cfg.chains.chain(sport, category) {
            let ordered: Vec<Arc<dyn SportsSource>> = keys
                .iter()
                .filter_map(|k| {
                    self.sources
                        .iter()
                        .find(|s| s.name() == k.as_str())
                        .cloned()
                })
                .collect();
            if !ordered.is_empty() {
                return ordered;
            }
        }
        self.sources.clone()
    }

    /// Wrap a source future with the per-source timeout and standardized
    /// timeout error mapping.
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, VarsityError>
    where
        Fut: core::future::Future<Output = Result<T, VarsityError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VarsityError::source_timeout(source_name, capability)))
    }
}
