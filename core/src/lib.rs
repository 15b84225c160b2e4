//! Synchronous client for the Database Management REST API.
//!
//! # Overview
//! Operations are described as `RequestDescriptor` values (method, path,
//! query, headers, body) and executed by an `Executor` that signs the
//! request, sends it through a `Transport`, and retries according to a
//! `RetryConfig`. The service clients in `clients` map one method to one
//! REST operation; `models` holds the payload types.
//!
//! # Design
//! - Building a request is pure. Every operation has a `build_*` method that
//!   validates its inputs and returns the descriptor without I/O, so the
//!   request shape can be checked without a network.
//! - The network sits behind the `Transport` trait (`UreqTransport` by
//!   default) and authentication behind `Signer`; both are injected.
//! - Calls block the calling thread. Clients hold immutable configuration
//!   and can be shared across threads when transport and signer allow it.
//! - Models are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod clients;
pub mod config;
pub mod descriptor;
pub mod endpoint;
pub mod enums;
pub mod error;
pub mod executor;
pub mod http;
pub mod idempotency;
pub mod models;
pub mod response;
pub mod retry;
pub mod signer;
pub mod transport;
pub mod wire;

pub use client::ClientBuilder;
pub use clients::{
    DbManagementClient, DiagnosabilityClient, IfMatchOptions, RequestOptions, RetryTokenOptions,
    ServiceManagerProxyClient, SqlTuningClient,
};
pub use config::ClientConfig;
pub use descriptor::{CollectionFormat, RequestDescriptor};
pub use enums::{ApiEnum, SortOrder};
pub use error::{ApiError, ServiceError, TransportError, TransportErrorKind};
pub use executor::{CallSettings, Executor};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::Response;
pub use retry::{Backoff, RetryConfig, RetryOverride, RetryState, RetryTracker};
pub use signer::{NoopSigner, Signer};
pub use transport::{Transport, UreqTransport};
