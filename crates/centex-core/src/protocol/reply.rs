//! Inbound API replies.
//!
//! The server answers a command batch with a JSON array of replies, one per
//! command:
//!
//! ```text
//! [{"method":"node","error":"","body":{"data":{"metrics":{"node_num_clients":42}}}}]
//! ```
//!
//! A bare envelope object (`{"error":"..."}` or `{"data":{"metrics":{...}}}`)
//! is accepted as well.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::ScrapeError;
use crate::metric::NodeMetrics;

/// Reply to a single command.
#[derive(Debug, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub method: Option<String>,
    /// Application-level error; empty or absent on success.
    #[serde(default)]
    pub error: Option<String>,
    /// Command result, decoded lazily.
    #[serde(default)]
    pub body: Option<Box<RawValue>>,
    /// Node data inlined in the envelope (no `body` wrapper).
    #[serde(default)]
    pub data: Option<NodeData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeBody {
    #[serde(default)]
    pub data: Option<NodeData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeData {
    /// `null` and absent both mean no metrics.
    #[serde(default)]
    pub metrics: Option<NodeMetrics>,
}

/// Decode a `node` command reply into its metrics map.
///
/// A successful reply without any metrics yields an empty map.
pub fn decode_node_reply(raw: &[u8]) -> Result<NodeMetrics, ScrapeError> {
    let reply = first_reply(raw)?;

    if let Some(err) = reply.error.as_deref().filter(|e| !e.is_empty()) {
        return Err(ScrapeError::Upstream(err.to_string()));
    }

    if let Some(body) = reply.body {
        let body: NodeBody = serde_json::from_str(body.get())?;
        return Ok(body.data.and_then(|d| d.metrics).unwrap_or_default());
    }

    Ok(reply.data.and_then(|d| d.metrics).unwrap_or_default())
}

fn first_reply(raw: &[u8]) -> Result<Reply, ScrapeError> {
    // RawValue cannot live inside an untagged enum, so pick the shape by the
    // first significant byte instead.
    match raw.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => {
            let replies: Vec<Reply> = serde_json::from_slice(raw)?;
            replies.into_iter().next().ok_or(ScrapeError::EmptyReply)
        }
        Some(_) => Ok(serde_json::from_slice(raw)?),
        None => Err(ScrapeError::EmptyReply),
    }
}
