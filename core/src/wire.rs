//! JSON wire codec.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub fn to_wire_body<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Decode a success body. `operation`, `status` and `opc_request_id` are
/// carried into the error so a malformed payload can still be traced.
pub fn from_wire_body<T: DeserializeOwned>(
    body: &str,
    operation: &'static str,
    status: u16,
    opc_request_id: Option<&str>,
) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization {
        operation,
        status,
        message: e.to_string(),
        opc_request_id: opc_request_id.map(str::to_string),
    })
}
