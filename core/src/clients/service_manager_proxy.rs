//! Service Manager Proxy: service environments (`/20210914`).

use super::RequestOptions;
use crate::descriptor::RequestDescriptor;
use crate::enums::SortOrder;
use crate::error::ApiError;
use crate::executor::{CallSettings, Executor};
use crate::http::HttpMethod;
use crate::models::*;
use crate::response::Response;

#[derive(Debug, Clone)]
pub struct ServiceManagerProxyClient {
    executor: Executor,
}

client_common!(ServiceManagerProxyClient);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListServiceEnvironmentsOptions {
    pub service_environment_id: Option<String>,
    pub service_environment_type: Option<String>,
    pub display_name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<ServiceEnvironmentSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

impl ServiceManagerProxyClient {
    pub fn build_list_service_environments(
        &self,
        compartment_id: &str,
        opts: &ListServiceEnvironmentsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/serviceEnvironments",
            "ListServiceEnvironments",
        )
        .required_query("compartmentId", compartment_id)
        .query("serviceEnvironmentId", opts.service_environment_id.as_deref())
        .query("serviceEnvironmentType", opts.service_environment_type.as_deref())
        .query("displayName", opts.display_name.as_deref())
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_service_environments(
        &self,
        compartment_id: &str,
        opts: &ListServiceEnvironmentsOptions,
    ) -> Result<Response<ServiceEnvironmentCollection>, ApiError> {
        let descriptor = self.build_list_service_environments(compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    /// The service requires the compartment alongside the environment id.
    pub fn build_get_service_environment(
        &self,
        service_environment_id: &str,
        compartment_id: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/serviceEnvironments/{serviceEnvironmentId}",
            "GetServiceEnvironment",
        )
        .path_param("serviceEnvironmentId", service_environment_id)
        .required_query("compartmentId", compartment_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_service_environment(
        &self,
        service_environment_id: &str,
        compartment_id: &str,
        opts: &RequestOptions,
    ) -> Result<Response<ServiceEnvironment>, ApiError> {
        let descriptor =
            self.build_get_service_environment(service_environment_id, compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }
}
