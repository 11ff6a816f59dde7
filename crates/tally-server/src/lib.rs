//! tally server library entry.
//!
//! This crate wires configuration, the user store, request instrumentation,
//! and the HTTP handlers into a single axum router. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
