//! portscope server library entry.
//!
//! Wires config, shared environment options, and the HTTP admin API into a
//! small host for the port-range policy store. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod router;
