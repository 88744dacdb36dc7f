//! Outbound API commands.

use bytes::Bytes;
use serde::Serialize;

use crate::error::ScrapeError;

/// Method name of the node statistics command.
pub const METHOD_NODE: &str = "node";

/// One admin API command (`{"method": ...}`).
#[derive(Debug, Clone, Serialize)]
pub struct Command {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl Command {
    /// Node-level status query.
    pub fn node() -> Self {
        Self {
            method: METHOD_NODE,
            params: None,
        }
    }
}

/// Serialize a command batch into the request body.
///
/// The returned bytes are what gets signed, so they must be sent unchanged.
pub fn encode_commands(cmds: &[Command]) -> Result<Bytes, ScrapeError> {
    let body = serde_json::to_vec(cmds)?;
    Ok(Bytes::from(body))
}
