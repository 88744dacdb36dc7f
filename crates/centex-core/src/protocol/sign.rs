//! Request signing (`X-API-Sign`).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGN_HEADER: &str = "X-API-Sign";

/// HMAC-SHA256 signer keyed with the shared API secret.
///
/// The keyed state is computed once; each `sign` call clones it.
#[derive(Clone)]
pub struct ApiSigner {
    mac: HmacSha256,
}

impl ApiSigner {
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| ConfigError::Invalid(format!("api secret rejected: {e}")))?;
        Ok(Self { mac })
    }

    /// Lowercase hex HMAC of `body`.
    pub fn sign(&self, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for ApiSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiSigner { .. }")
    }
}
