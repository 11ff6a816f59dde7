//! Lightweight in-process metrics.
//!
//! Instruments are stored as atomics keyed by label-value tuples and rendered
//! on demand in the Prometheus text exposition format. A [`Registry`] is
//! built once at startup, then shared read-only; instruments stay mutable
//! through interior atomics.

pub mod counter;
pub mod registry;
pub mod text;

pub use counter::CounterVec;
pub use registry::{Collector, DuplicateMetricError, Registry};
pub use text::CONTENT_TYPE;
