//! Service clients, one method per REST operation.
//!
//! # Design
//! Every operation comes in two halves. `build_*` validates its inputs and
//! returns a `RequestDescriptor` without any I/O; the executing method
//! hands that descriptor to the client's `Executor`. Tests and callers that
//! drive their own transport can stop after the first half.
//!
//! Options structs hold the optional parameters of an operation. They all
//! implement `Default`, so call sites only spell out what they set.

use crate::executor::CallSettings;

/// Options for operations that take no optional parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

/// Options for create and action operations that accept `opc-retry-token`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetryTokenOptions {
    /// Supplied verbatim when set; a fresh token is generated otherwise.
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

/// Options for updates and deletes guarded by `if-match`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IfMatchOptions {
    /// ETag from a previous read; the service rejects the call with 412 if
    /// the resource changed since.
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

/// Implements the endpoint setters and executor accessors shared by every
/// client type.
macro_rules! client_common {
    ($client:ident) => {
        impl $client {
            pub fn new(executor: $crate::executor::Executor) -> Self {
                Self { executor }
            }

            pub fn executor(&self) -> &$crate::executor::Executor {
                &self.executor
            }

            pub fn base_url(&self) -> &str {
                self.executor.base_url()
            }

            /// Point the client at another region.
            pub fn set_region(&mut self, region: &str) -> Result<(), $crate::error::ApiError> {
                self.executor.set_region(region)
            }

            /// Point the client at an explicit endpoint.
            pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), $crate::error::ApiError> {
                self.executor.set_endpoint(endpoint)
            }
        }
    };
}

mod db_management;
mod diagnosability;
mod service_manager_proxy;
mod sql_tuning;

pub use db_management::*;
pub use diagnosability::*;
pub use service_manager_proxy::*;
pub use sql_tuning::*;
