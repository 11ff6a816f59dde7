//! Metric registry and renderer.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

/// Anything that can render itself as one exposition block.
pub trait Collector: Send + Sync {
    /// Unique metric name.
    fn name(&self) -> &str;
    /// Append `# HELP`, `# TYPE`, then sample lines. No blank lines.
    fn render(&self, out: &mut String);
}

/// Raised when a name is registered twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("metric already registered: {name}")]
pub struct DuplicateMetricError {
    pub name: String,
}

/// Collection of instruments, rendered in registration order.
///
/// Registration takes `&mut self` and happens during startup; once built,
/// the registry is shared behind an `Arc` and only rendered.
#[derive(Default)]
pub struct Registry {
    collectors: Vec<Arc<dyn Collector>>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, metric: Arc<dyn Collector>) -> Result<(), DuplicateMetricError> {
        let name = metric.name().to_string();
        if !self.names.insert(name.clone()) {
            return Err(DuplicateMetricError { name });
        }
        self.collectors.push(metric);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Render all registered metrics in text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for c in &self.collectors {
            c.render(&mut out);
        }
        out
    }
}
