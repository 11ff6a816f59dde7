//! Shared application state for the tally server.
//!
//! Built once at startup: the metrics registry is constructed here and handed
//! to the middleware and `/metrics` through this state, never through a global.

use std::sync::Arc;

use tally_core::error::Result;

use crate::config::TallyConfig;
use crate::obs::HttpMetrics;
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TallyConfig,
    metrics: HttpMetrics,
    store: Arc<dyn UserStore>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so a bad metric setup fails startup instead of serving.
    pub fn new(cfg: TallyConfig, store: Arc<dyn UserStore>) -> Result<Self> {
        let metrics = HttpMetrics::new(&cfg.metrics.namespace)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics,
                store,
            }),
        })
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.inner.metrics
    }

    pub fn store(&self) -> &dyn UserStore {
        self.inner.store.as_ref()
    }
}
