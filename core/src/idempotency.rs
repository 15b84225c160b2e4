//! Retry tokens for mutating calls.
//!
//! A token is attached as `opc-retry-token` so the service can collapse
//! duplicate submissions of the same create or action request. Tokens are
//! only generated here; their server-side lifetime is not tracked.

use uuid::Uuid;

/// A fresh token: 32 lowercase hex characters from a random v4 UUID.
pub fn generate_retry_token() -> String {
    Uuid::new_v4().simple().to_string()
}
