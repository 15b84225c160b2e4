//! Request signing seam.
//!
//! Signing itself (key material, the signature algorithm) lives outside this
//! crate. The executor calls `sign` once per attempt and appends whatever
//! headers it returns.

use crate::error::ApiError;
use crate::http::HttpRequest;

pub trait Signer: Send + Sync {
    /// Headers to add to `request`, e.g. `authorization` and `date`.
    fn sign(&self, request: &HttpRequest) -> Result<Vec<(String, String)>, ApiError>;

    /// Region carried by the credentials, used when the client was not
    /// given one explicitly.
    fn region(&self) -> Option<&str> {
        None
    }
}

/// Adds nothing. For unauthenticated endpoints and the mock server.
#[derive(Debug, Clone, Default)]
pub struct NoopSigner {
    region: Option<String>,
}

impl NoopSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(region: &str) -> Self {
        Self {
            region: Some(region.to_string()),
        }
    }
}

impl Signer for NoopSigner {
    fn sign(&self, _request: &HttpRequest) -> Result<Vec<(String, String)>, ApiError> {
        Ok(Vec::new())
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
