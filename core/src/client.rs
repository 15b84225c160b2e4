//! Client construction: configuration, signer and transport in, a ready
//! service client out.
//!
//! # Design
//! `ClientBuilder` resolves the endpoint once per built client. Explicit
//! builder settings win over the signer's region, which wins over the
//! configuration. Each `build_*` call produces an independent client; the
//! transport and signer are shared behind `Arc`.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{DbManagementClient, DiagnosabilityClient, ServiceManagerProxyClient, SqlTuningClient};
use crate::config::ClientConfig;
use crate::endpoint::{self, ServiceEndpoint, DATABASE_MANAGEMENT, SERVICE_MANAGER_PROXY};
use crate::error::ApiError;
use crate::executor::{Executor, Sleeper};
use crate::retry::RetryConfig;
use crate::signer::{NoopSigner, Signer};
use crate::transport::{Transport, UreqTransport};

#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    region: Option<String>,
    endpoint: Option<String>,
    signer: Option<Arc<dyn Signer>>,
    transport: Option<Arc<dyn Transport>>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    sleeper: Option<Sleeper>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Client-wide retry policy; overrides `retry` from the configuration.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace `std::thread::sleep` between retry attempts.
    pub fn sleeper(mut self, sleeper: Sleeper) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    pub fn build_db_management(&self) -> Result<DbManagementClient, ApiError> {
        Ok(DbManagementClient::new(self.executor(DATABASE_MANAGEMENT)?))
    }

    pub fn build_diagnosability(&self) -> Result<DiagnosabilityClient, ApiError> {
        Ok(DiagnosabilityClient::new(self.executor(DATABASE_MANAGEMENT)?))
    }

    pub fn build_sql_tuning(&self) -> Result<SqlTuningClient, ApiError> {
        Ok(SqlTuningClient::new(self.executor(DATABASE_MANAGEMENT)?))
    }

    pub fn build_service_manager_proxy(&self) -> Result<ServiceManagerProxyClient, ApiError> {
        Ok(ServiceManagerProxyClient::new(self.executor(SERVICE_MANAGER_PROXY)?))
    }

    fn executor(&self, service: ServiceEndpoint) -> Result<Executor, ApiError> {
        let signer: Arc<dyn Signer> = match &self.signer {
            Some(signer) => Arc::clone(signer),
            None => Arc::new(NoopSigner::new()),
        };
        let transport: Arc<dyn Transport> = match (&self.transport, &self.config.proxy) {
            (Some(transport), _) => Arc::clone(transport),
            (None, Some(proxy)) => Arc::new(UreqTransport::with_proxy(proxy)?),
            (None, None) => Arc::new(UreqTransport::new()),
        };

        let base_url = endpoint::resolve_base_url(
            &service,
            self.endpoint.as_deref().or(self.config.endpoint.as_deref()),
            self.region.as_deref(),
            signer.region(),
            self.config.region.as_deref(),
        )?;

        let mut executor = Executor::new(service, base_url, transport, signer)
            .with_retry_default(self.retry.clone().or_else(|| self.config.retry.clone()))
            .with_timeout(self.timeout.or_else(|| self.config.timeout()));
        if let Some(sleeper) = &self.sleeper {
            executor = executor.with_sleeper(Arc::clone(sleeper));
        }
        Ok(executor)
    }
}
