//! centex exporter library entry.
//!
//! Wires the upstream client, the collector, Prometheus exposition, and the
//! HTTP routes. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod collector;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod upstream;
