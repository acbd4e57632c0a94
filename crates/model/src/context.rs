//! Model Context - collaborators injected into every wrapper
//!
//! A context bundles the table name cache, the clock and the naming
//! configuration. `ModelContext::global()` shares one cache across the
//! process; `ModelContext::isolated()` starts from an empty one.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use once_cell::sync::Lazy;

use crate::cache::TableNameCache;
use crate::clock::{Clock, SystemClock};
use crate::config::ModelConfig;

static GLOBAL_CONTEXT: Lazy<ModelContext> = Lazy::new(|| {
    ModelContext::new(
        Arc::new(TableNameCache::new()),
        Arc::new(SystemClock),
        Arc::new(ModelConfig::default()),
    )
});

#[derive(Debug, Clone)]
pub struct ModelContext {
    cache: Arc<TableNameCache>,
    clock: Arc<dyn Clock>,
    config: Arc<ModelConfig>,
}

impl ModelContext {
    pub fn new(cache: Arc<TableNameCache>, clock: Arc<dyn Clock>, config: Arc<ModelConfig>) -> Self {
        Self {
            cache,
            clock,
            config,
        }
    }

    /// Context sharing the process-wide table name cache
    pub fn global() -> Self {
        GLOBAL_CONTEXT.clone()
    }

    /// Context with a fresh cache, system clock and default configuration
    pub fn isolated() -> Self {
        Self::new(
            Arc::new(TableNameCache::new()),
            Arc::new(SystemClock),
            Arc::new(ModelConfig::default()),
        )
    }

    pub fn with_cache(mut self, cache: Arc<TableNameCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn cache(&self) -> &TableNameCache {
        &self.cache
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Current time truncated to microsecond precision
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(6)
    }
}

impl Default for ModelContext {
    fn default() -> Self {
        Self::global()
    }
}
