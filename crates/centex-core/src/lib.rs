//! centex core: transport-agnostic metric identities, the Centrifugo catalog,
//! the admin API wire protocol, and the shared error surface.
//!
//! Nothing here performs I/O. The exporter crate owns the HTTP transport and
//! the serving loop; this crate only describes what is sent, what comes back,
//! and how upstream fields map onto metric series.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed upstream reply must surface as `ScrapeError`, never as a crash
//! of the process serving `/metrics`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod metric;
pub mod protocol;

pub use catalog::Catalog;
pub use error::{ConfigError, ScrapeError};
pub use metric::{MetricIdentity, MetricKind, NodeMetrics, Observation};
