//! tally core: metric instruments, the text exposition renderer, the user
//! record model, and the error surface shared by the server and its tests.
//!
//! This crate carries no HTTP or async runtime dependencies so the registry
//! can be exercised directly and embedded anywhere.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Observation paths
//! run inside request handling and must never take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;

/// Shared result type.
pub use error::{Result, TallyError};
