//! Centrifugo admin API wire format.
//!
//! - `command`: JSON array of commands sent as the POST body.
//! - `reply`: reply envelopes, with the node body kept as `RawValue` until the
//!   envelope error field has been checked.
//! - `sign`: `X-API-Sign` HMAC-SHA256 over the exact body bytes.
//!
//! Decoding is panic-free: malformed replies are reported as `ScrapeError`.

pub mod command;
pub mod reply;
pub mod sign;

pub use command::{encode_commands, Command};
pub use reply::decode_node_reply;
pub use sign::ApiSigner;
