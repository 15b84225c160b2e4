//! The network boundary.
//!
//! # Design
//! `Transport::send` performs exactly one HTTP exchange and returns every
//! status code as data; only failures below HTTP become `TransportError`.
//! Interpretation of the status code, and any retrying, belongs to the
//! executor.

use std::time::Duration;

use crate::error::{TransportError, TransportErrorKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport: Send + Sync {
    /// Execute one request. `timeout` bounds the whole exchange when set.
    fn send(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_agent(
            ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent(),
        )
    }

    /// Route every request through the proxy at `proxy` (e.g.
    /// `http://proxy.internal:3128`).
    pub fn with_proxy(proxy: &str) -> Result<Self, crate::error::ApiError> {
        let proxy = ureq::Proxy::new(proxy)
            .map_err(|e| crate::error::ApiError::Configuration(format!("invalid proxy `{proxy}`: {e}")))?;
        Ok(Self::with_agent(
            ureq::Agent::config_builder()
                .http_status_as_error(false)
                .proxy(Some(proxy))
                .build()
                .new_agent(),
        ))
    }

    /// The agent must be configured with `http_status_as_error(false)`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse, TransportError> {
        let url = request.path.as_str();
        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), request, timeout).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), request, timeout).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(url), request, timeout);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(url), request, timeout);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| map_ureq_error(e, url))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| map_ureq_error(e, url))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
    timeout: Option<Duration>,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    match timeout {
        Some(timeout) => builder.config().timeout_global(Some(timeout)).build(),
        None => builder,
    }
}

fn map_ureq_error(error: ureq::Error, endpoint: &str) -> TransportError {
    let kind = match &error {
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::HostNotFound => TransportErrorKind::Dns,
        ureq::Error::ConnectionFailed => TransportErrorKind::Connect,
        ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => TransportErrorKind::Timeout,
        ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => TransportErrorKind::Connect,
        ureq::Error::Io(_) => TransportErrorKind::Io,
        _ => TransportErrorKind::Other,
    };
    TransportError::new(kind, endpoint, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ureq_errors_map_to_kinds() {
        let cases = [
            (ureq::Error::HostNotFound, TransportErrorKind::Dns),
            (ureq::Error::ConnectionFailed, TransportErrorKind::Connect),
            (
                ureq::Error::Io(std::io::Error::from(std::io::ErrorKind::ConnectionRefused)),
                TransportErrorKind::Connect,
            ),
            (
                ureq::Error::Io(std::io::Error::from(std::io::ErrorKind::TimedOut)),
                TransportErrorKind::Timeout,
            ),
            (
                ureq::Error::Io(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
                TransportErrorKind::Io,
            ),
        ];
        for (error, kind) in cases {
            let mapped = map_ureq_error(error, "http://localhost/x");
            assert_eq!(mapped.kind, kind);
            assert_eq!(mapped.endpoint, "http://localhost/x");
        }
    }

    #[test]
    fn invalid_proxy_is_a_configuration_error() {
        let err = UreqTransport::with_proxy("::not a proxy::").unwrap_err();
        assert!(matches!(err, crate::error::ApiError::Configuration(_)));
    }
}
