//! Payload types for every operation the clients expose.
//!
//! Response types are lenient: optional fields default when absent and enum
//! fields accept values this client does not know yet. Request detail types
//! skip `None` fields when serialized so the service applies its own
//! defaults.

pub mod awr;
pub mod diagnosability;
pub mod fleet;
pub mod managed_database;
pub mod managed_database_group;
pub mod private_endpoint;
pub mod service_manager_proxy;
pub mod sql_tuning;
pub mod tablespace;
pub mod user;
pub mod work_request;

use std::collections::BTreeMap;

pub use awr::*;
pub use diagnosability::*;
pub use fleet::*;
pub use managed_database::*;
pub use managed_database_group::*;
pub use private_endpoint::*;
pub use service_manager_proxy::*;
pub use sql_tuning::*;
pub use tablespace::*;
pub use user::*;
pub use work_request::*;

/// Free-form `key: value` tags.
pub type FreeformTags = BTreeMap<String, String>;

/// Namespaced tags: `namespace -> key -> value`.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, serde_json::Value>>;
