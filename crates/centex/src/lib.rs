//! Top-level facade crate for centex.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use centex_core::*;
}

pub mod exporter {
    pub use centex_exporter::*;
}
