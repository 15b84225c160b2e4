//! Request execution: sign, send, interpret, and drive the retry loop.
//!
//! # Design
//! One attempt performs exactly one `Transport::send`. The loop around it is
//! sequential and consults a `RetryTracker` after every failure. The HTTP
//! request is lowered from the descriptor once per call, so every attempt
//! carries identical headers (including `opc-retry-token`); only the signer
//! headers are recomputed per attempt.
//!
//! An `Executor` holds immutable configuration only. It is safe to share
//! across threads when its transport and signer are.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::descriptor::{RequestDescriptor, OPC_REQUEST_ID};
use crate::endpoint::ServiceEndpoint;
use crate::error::{ApiError, ServiceError};
use crate::http::{HttpRequest, HttpResponse};
use crate::response::Response;
use crate::retry::{RetryConfig, RetryOverride, RetryTracker};
use crate::signer::Signer;
use crate::transport::Transport;
use crate::wire;

/// Called with each backoff delay. Defaults to `std::thread::sleep`.
pub type Sleeper = Arc<dyn Fn(Duration) + Send + Sync>;

/// Per-call execution settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallSettings {
    pub retry: RetryOverride,
    /// Per-attempt timeout; falls back to the client default.
    pub timeout: Option<Duration>,
}

impl CallSettings {
    pub fn no_retry() -> Self {
        Self {
            retry: RetryOverride::Disabled,
            timeout: None,
        }
    }

    pub fn with_retry(retry: RetryConfig) -> Self {
        Self {
            retry: RetryOverride::Config(retry),
            timeout: None,
        }
    }
}

#[derive(Clone)]
pub struct Executor {
    service: ServiceEndpoint,
    base_url: String,
    transport: Arc<dyn Transport>,
    signer: Arc<dyn Signer>,
    retry_default: Option<RetryConfig>,
    timeout: Option<Duration>,
    sleeper: Sleeper,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("base_url", &self.base_url)
            .field("retry_default", &self.retry_default)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(
        service: ServiceEndpoint,
        base_url: String,
        transport: Arc<dyn Transport>,
        signer: Arc<dyn Signer>,
    ) -> Self {
        Self {
            service,
            base_url,
            transport,
            signer,
            retry_default: None,
            timeout: None,
            sleeper: Arc::new(std::thread::sleep),
        }
    }

    pub fn with_retry_default(mut self, retry: Option<RetryConfig>) -> Self {
        self.retry_default = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Sleeper) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service(&self) -> ServiceEndpoint {
        self.service
    }

    pub fn retry_default(&self) -> Option<&RetryConfig> {
        self.retry_default.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Re-derive the base URL from `region`. A blank region is a
    /// configuration error and leaves the current endpoint in place.
    pub fn set_region(&mut self, region: &str) -> Result<(), ApiError> {
        self.base_url = crate::endpoint::resolve_base_url(&self.service, None, Some(region), None, None)?;
        tracing::info!(region, base_url = %self.base_url, "endpoint changed");
        Ok(())
    }

    /// Use `endpoint` verbatim (plus the API version).
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ApiError> {
        self.base_url = crate::endpoint::resolve_base_url(&self.service, Some(endpoint), None, None, None)?;
        tracing::info!(base_url = %self.base_url, "endpoint changed");
        Ok(())
    }

    /// Execute and decode the body as `T`.
    pub fn execute<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
        settings: &CallSettings,
    ) -> Result<Response<T>, ApiError> {
        let response = self.run(&descriptor, settings)?;
        let data = wire::from_wire_body(
            &response.body,
            descriptor.operation,
            response.status,
            response.header(OPC_REQUEST_ID),
        )?;
        Ok(Response {
            status: response.status,
            headers: response.headers,
            data,
            raw_body: response.body,
        })
    }

    /// Execute an operation that returns no body.
    pub fn execute_empty(
        &self,
        descriptor: RequestDescriptor,
        settings: &CallSettings,
    ) -> Result<Response<()>, ApiError> {
        let response = self.run(&descriptor, settings)?;
        Ok(Response {
            status: response.status,
            headers: response.headers,
            data: (),
            raw_body: response.body,
        })
    }

    fn run(&self, descriptor: &RequestDescriptor, settings: &CallSettings) -> Result<HttpResponse, ApiError> {
        let mut tracker = RetryTracker::new(settings.retry.resolve(self.retry_default.as_ref()));
        let request = descriptor.to_http_request(&self.base_url);
        let timeout = settings.timeout.or(self.timeout);

        loop {
            let attempt = tracker.begin_attempt();
            tracing::debug!(
                operation = descriptor.operation,
                attempt,
                max_attempts = tracker.max_attempts(),
                method = %request.method,
                url = %request.path,
                "sending request"
            );

            match self.attempt(descriptor, &request, timeout) {
                Ok(response) => {
                    tracker.record_success();
                    tracing::debug!(
                        operation = descriptor.operation,
                        attempt,
                        status = response.status,
                        opc_request_id = ?response.header(OPC_REQUEST_ID),
                        "request succeeded"
                    );
                    return Ok(response);
                }
                Err(err) => {
                    let decision = tracker.record_failure(&err);
                    if !decision.retry {
                        tracing::debug!(
                            operation = descriptor.operation,
                            attempts = tracker.attempts(),
                            state = ?tracker.state(),
                            opc_request_id = ?err.opc_request_id(),
                            error = %err,
                            "request failed"
                        );
                        return Err(err);
                    }
                    tracing::warn!(
                        operation = descriptor.operation,
                        attempt,
                        max_attempts = tracker.max_attempts(),
                        backoff_ms = u64::try_from(decision.delay.as_millis()).unwrap_or(u64::MAX),
                        opc_request_id = ?err.opc_request_id(),
                        error = %err,
                        "retrying request"
                    );
                    (self.sleeper)(decision.delay);
                }
            }
        }
    }

    fn attempt(
        &self,
        descriptor: &RequestDescriptor,
        request: &HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, ApiError> {
        let mut signed = request.clone();
        let auth_headers = self.signer.sign(request)?;
        signed.headers.extend(auth_headers);

        let response = self.transport.send(&signed, timeout).map_err(|mut e| {
            e.opc_request_id = request.header(OPC_REQUEST_ID).map(str::to_string);
            ApiError::Transport(e)
        })?;

        if response.is_success() {
            return Ok(response);
        }
        Err(ApiError::Service(service_error(descriptor, request, &response)))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

fn service_error(descriptor: &RequestDescriptor, request: &HttpRequest, response: &HttpResponse) -> ServiceError {
    let parsed = serde_json::from_str::<ErrorBody>(&response.body).ok();
    let code = parsed
        .as_ref()
        .and_then(|b| b.code.clone())
        .unwrap_or_else(|| default_code(response.status).to_string());
    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| response.body.clone());
    let opc_request_id = response
        .header(OPC_REQUEST_ID)
        .or_else(|| request.header(OPC_REQUEST_ID))
        .map(str::to_string);
    let retry_after = response
        .header("retry-after")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs);

    ServiceError {
        status: response.status,
        code,
        message,
        opc_request_id,
        operation: descriptor.operation,
        request_endpoint: format!("{} {}", request.method, request.path),
        retry_after,
    }
}

fn default_code(status: u16) -> &'static str {
    match status {
        400 => "BadRequest",
        401 => "NotAuthenticated",
        403 => "NotAuthorized",
        404 => "NotFound",
        409 => "Conflict",
        412 => "PreconditionFailed",
        429 => "TooManyRequests",
        500 => "InternalServerError",
        502 => "BadGateway",
        503 => "ServiceUnavailable",
        504 => "GatewayTimeout",
        _ => "Unknown",
    }
}
