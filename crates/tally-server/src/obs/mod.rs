//! Request instrumentation.
//!
//! One counter, `http_requests_total{method,route,code}`, incremented once
//! per completed request/response cycle and rendered by `/metrics`.

pub mod body;
pub mod middleware;

use std::sync::Arc;

use tally_core::error::Result;
use tally_core::metrics::{CounterVec, Registry};

pub use middleware::{track_requests, UNMATCHED_ROUTE};

const REQUESTS_NAME: &str = "http_requests_total";
const REQUESTS_HELP: &str = "Total number of HTTP requests";
const REQUEST_LABELS: [&str; 3] = ["method", "route", "code"];

/// Registry plus the handles the middleware records into.
pub struct HttpMetrics {
    registry: Registry,
    requests: Arc<CounterVec>,
}

impl HttpMetrics {
    /// Build a fresh registry. An empty `namespace` means no prefix.
    pub fn new(namespace: &str) -> Result<Self> {
        let name = if namespace.is_empty() {
            REQUESTS_NAME.to_string()
        } else {
            format!("{namespace}_{REQUESTS_NAME}")
        };
        let requests = Arc::new(CounterVec::new(&name, REQUESTS_HELP, &REQUEST_LABELS)?);

        let mut registry = Registry::new();
        registry.register(requests.clone())?;
        Ok(Self { registry, requests })
    }

    pub fn requests(&self) -> &CounterVec {
        &self.requests
    }

    pub fn render(&self) -> String {
        self.registry.render()
    }

    /// Record one completed request. Never fails the caller.
    pub fn observe(&self, method: &str, route: &str, code: &str) {
        if !self.requests.inc(&[method, route, code]) {
            tracing::warn!(method, route, code, "request observation dropped");
        }
    }
}
