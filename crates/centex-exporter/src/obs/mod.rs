//! Prometheus text exposition of collected observations.

pub mod exposition;

pub use exposition::{render, CONTENT_TYPE};
