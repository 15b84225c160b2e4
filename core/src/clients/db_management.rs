//! Managed databases, groups, private endpoints, fleet metrics, AWR and
//! work requests.

use chrono::{DateTime, Utc};

use super::{IfMatchOptions, RequestOptions, RetryTokenOptions};
use crate::descriptor::{CollectionFormat, RequestDescriptor};
use crate::enums::SortOrder;
use crate::error::ApiError;
use crate::executor::{CallSettings, Executor};
use crate::http::HttpMethod;
use crate::models::*;
use crate::response::Response;

/// Client for the Database Management service (`/20201101`).
#[derive(Debug, Clone)]
pub struct DbManagementClient {
    executor: Executor,
}

client_common!(DbManagementClient);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListManagedDatabasesOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub management_option: Option<ManagementOption>,
    pub deployment_type: Option<DeploymentType>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<ManagedDatabaseSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTablespacesOptions {
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<TablespaceSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsersOptions {
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<UserSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListManagedDatabaseGroupsOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub lifecycle_state: Option<ManagedDatabaseGroupLifecycleState>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<ManagedDatabaseGroupSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDbManagementPrivateEndpointsOptions {
    pub name: Option<String>,
    pub vcn_id: Option<String>,
    pub is_cluster: Option<bool>,
    pub lifecycle_state: Option<PrivateEndpointLifecycleState>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<PrivateEndpointSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDatabaseFleetHealthMetricsOptions {
    pub managed_database_group_id: Option<String>,
    pub compartment_id: Option<String>,
    pub compare_type: Option<CompareType>,
    /// Sent as a single comma-separated value.
    pub filter_by_metric_names: Option<String>,
    pub filter_by_database_type: Vec<DatabaseType>,
    pub filter_by_database_sub_type: Vec<DatabaseSubType>,
    pub filter_by_database_deployment_type: Vec<DeploymentType>,
    pub filter_by_database_version: Option<String>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizeAwrDbMetricsOptions {
    pub inst_num: Option<String>,
    pub begin_sn_id_greater_than_or_equal_to: Option<u64>,
    pub end_sn_id_less_than_or_equal_to: Option<u64>,
    pub time_greater_than_or_equal_to: Option<DateTime<Utc>>,
    pub time_less_than_or_equal_to: Option<DateTime<Utc>>,
    pub session_type: Option<String>,
    pub container_id: Option<u32>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<AwrDbMetricSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListWorkRequestsOptions {
    pub resource_id: Option<String>,
    pub status: Option<WorkRequestStatus>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<WorkRequestSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

impl DbManagementClient {
    // Managed databases

    pub fn build_get_managed_database(
        &self,
        managed_database_id: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}",
            "GetManagedDatabase",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_managed_database(
        &self,
        managed_database_id: &str,
        opts: &RequestOptions,
    ) -> Result<Response<ManagedDatabase>, ApiError> {
        let descriptor = self.build_get_managed_database(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_managed_databases(
        &self,
        compartment_id: &str,
        opts: &ListManagedDatabasesOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(HttpMethod::Get, "/managedDatabases", "ListManagedDatabases")
            .required_query("compartmentId", compartment_id)
            .query("id", opts.id.as_deref())
            .query("name", opts.name.as_deref())
            .query_enum("managementOption", opts.management_option)
            .query_enum("deploymentType", opts.deployment_type)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .query_enum("sortBy", opts.sort_by)
            .query_enum("sortOrder", opts.sort_order)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn list_managed_databases(
        &self,
        compartment_id: &str,
        opts: &ListManagedDatabasesOptions,
    ) -> Result<Response<ManagedDatabaseCollection>, ApiError> {
        let descriptor = self.build_list_managed_databases(compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_update_managed_database(
        &self,
        managed_database_id: &str,
        details: &UpdateManagedDatabaseDetails,
        opts: &IfMatchOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Put,
            "/managedDatabases/{managedDatabaseId}",
            "UpdateManagedDatabase",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .if_match(opts.if_match.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn update_managed_database(
        &self,
        managed_database_id: &str,
        details: &UpdateManagedDatabaseDetails,
        opts: &IfMatchOptions,
    ) -> Result<Response<ManagedDatabase>, ApiError> {
        let descriptor = self.build_update_managed_database(managed_database_id, details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    // Tablespaces and users

    pub fn build_list_tablespaces(
        &self,
        managed_database_id: &str,
        opts: &ListTablespacesOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/tablespaces",
            "ListTablespaces",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query("name", opts.name.as_deref())
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_tablespaces(
        &self,
        managed_database_id: &str,
        opts: &ListTablespacesOptions,
    ) -> Result<Response<TablespaceCollection>, ApiError> {
        let descriptor = self.build_list_tablespaces(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_get_tablespace(
        &self,
        managed_database_id: &str,
        tablespace_name: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/tablespaces/{tablespaceName}",
            "GetTablespace",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .path_param("tablespaceName", tablespace_name)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_tablespace(
        &self,
        managed_database_id: &str,
        tablespace_name: &str,
        opts: &RequestOptions,
    ) -> Result<Response<Tablespace>, ApiError> {
        let descriptor = self.build_get_tablespace(managed_database_id, tablespace_name, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_users(
        &self,
        managed_database_id: &str,
        opts: &ListUsersOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/users",
            "ListUsers",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query("name", opts.name.as_deref())
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_users(
        &self,
        managed_database_id: &str,
        opts: &ListUsersOptions,
    ) -> Result<Response<UserCollection>, ApiError> {
        let descriptor = self.build_list_users(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_get_user(
        &self,
        managed_database_id: &str,
        user_name: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/users/{userName}",
            "GetUser",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .path_param("userName", user_name)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_user(
        &self,
        managed_database_id: &str,
        user_name: &str,
        opts: &RequestOptions,
    ) -> Result<Response<User>, ApiError> {
        let descriptor = self.build_get_user(managed_database_id, user_name, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    // Managed database groups

    pub fn build_create_managed_database_group(
        &self,
        details: &CreateManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabaseGroups",
            "CreateManagedDatabaseGroup",
        )
        .retry_token(opts.opc_retry_token.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn create_managed_database_group(
        &self,
        details: &CreateManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<Response<ManagedDatabaseGroup>, ApiError> {
        let descriptor = self.build_create_managed_database_group(details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_get_managed_database_group(
        &self,
        managed_database_group_id: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabaseGroups/{managedDatabaseGroupId}",
            "GetManagedDatabaseGroup",
        )
        .path_param("managedDatabaseGroupId", managed_database_group_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_managed_database_group(
        &self,
        managed_database_group_id: &str,
        opts: &RequestOptions,
    ) -> Result<Response<ManagedDatabaseGroup>, ApiError> {
        let descriptor = self.build_get_managed_database_group(managed_database_group_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_managed_database_groups(
        &self,
        compartment_id: &str,
        opts: &ListManagedDatabaseGroupsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabaseGroups",
            "ListManagedDatabaseGroups",
        )
        .required_query("compartmentId", compartment_id)
        .query("id", opts.id.as_deref())
        .query("name", opts.name.as_deref())
        .query_enum("lifecycleState", opts.lifecycle_state)
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_managed_database_groups(
        &self,
        compartment_id: &str,
        opts: &ListManagedDatabaseGroupsOptions,
    ) -> Result<Response<ManagedDatabaseGroupCollection>, ApiError> {
        let descriptor = self.build_list_managed_database_groups(compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_update_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &UpdateManagedDatabaseGroupDetails,
        opts: &IfMatchOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Put,
            "/managedDatabaseGroups/{managedDatabaseGroupId}",
            "UpdateManagedDatabaseGroup",
        )
        .path_param("managedDatabaseGroupId", managed_database_group_id)
        .if_match(opts.if_match.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn update_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &UpdateManagedDatabaseGroupDetails,
        opts: &IfMatchOptions,
    ) -> Result<Response<ManagedDatabaseGroup>, ApiError> {
        let descriptor =
            self.build_update_managed_database_group(managed_database_group_id, details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_delete_managed_database_group(
        &self,
        managed_database_group_id: &str,
        opts: &IfMatchOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Delete,
            "/managedDatabaseGroups/{managedDatabaseGroupId}",
            "DeleteManagedDatabaseGroup",
        )
        .path_param("managedDatabaseGroupId", managed_database_group_id)
        .if_match(opts.if_match.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn delete_managed_database_group(
        &self,
        managed_database_group_id: &str,
        opts: &IfMatchOptions,
    ) -> Result<Response<()>, ApiError> {
        let descriptor = self.build_delete_managed_database_group(managed_database_group_id, opts)?;
        self.executor.execute_empty(descriptor, &opts.call)
    }

    pub fn build_add_managed_database_to_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &AddManagedDatabaseToManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabaseGroups/{managedDatabaseGroupId}/actions/addManagedDatabase",
            "AddManagedDatabaseToManagedDatabaseGroup",
        )
        .path_param("managedDatabaseGroupId", managed_database_group_id)
        .retry_token(opts.opc_retry_token.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn add_managed_database_to_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &AddManagedDatabaseToManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<Response<()>, ApiError> {
        let descriptor = self.build_add_managed_database_to_managed_database_group(
            managed_database_group_id,
            details,
            opts,
        )?;
        self.executor.execute_empty(descriptor, &opts.call)
    }

    pub fn build_remove_managed_database_from_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &RemoveManagedDatabaseFromManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabaseGroups/{managedDatabaseGroupId}/actions/removeManagedDatabase",
            "RemoveManagedDatabaseFromManagedDatabaseGroup",
        )
        .path_param("managedDatabaseGroupId", managed_database_group_id)
        .retry_token(opts.opc_retry_token.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn remove_managed_database_from_managed_database_group(
        &self,
        managed_database_group_id: &str,
        details: &RemoveManagedDatabaseFromManagedDatabaseGroupDetails,
        opts: &RetryTokenOptions,
    ) -> Result<Response<()>, ApiError> {
        let descriptor = self.build_remove_managed_database_from_managed_database_group(
            managed_database_group_id,
            details,
            opts,
        )?;
        self.executor.execute_empty(descriptor, &opts.call)
    }

    // Private endpoints

    pub fn build_create_db_management_private_endpoint(
        &self,
        details: &CreateDbManagementPrivateEndpointDetails,
        opts: &RetryTokenOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/dbManagementPrivateEndpoints",
            "CreateDbManagementPrivateEndpoint",
        )
        .retry_token(opts.opc_retry_token.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn create_db_management_private_endpoint(
        &self,
        details: &CreateDbManagementPrivateEndpointDetails,
        opts: &RetryTokenOptions,
    ) -> Result<Response<DbManagementPrivateEndpoint>, ApiError> {
        let descriptor = self.build_create_db_management_private_endpoint(details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_get_db_management_private_endpoint(
        &self,
        private_endpoint_id: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/dbManagementPrivateEndpoints/{dbManagementPrivateEndpointId}",
            "GetDbManagementPrivateEndpoint",
        )
        .path_param("dbManagementPrivateEndpointId", private_endpoint_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_db_management_private_endpoint(
        &self,
        private_endpoint_id: &str,
        opts: &RequestOptions,
    ) -> Result<Response<DbManagementPrivateEndpoint>, ApiError> {
        let descriptor = self.build_get_db_management_private_endpoint(private_endpoint_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_db_management_private_endpoints(
        &self,
        compartment_id: &str,
        opts: &ListDbManagementPrivateEndpointsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/dbManagementPrivateEndpoints",
            "ListDbManagementPrivateEndpoints",
        )
        .required_query("compartmentId", compartment_id)
        .query("name", opts.name.as_deref())
        .query("vcnId", opts.vcn_id.as_deref())
        .query("isCluster", opts.is_cluster)
        .query_enum("lifecycleState", opts.lifecycle_state)
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_db_management_private_endpoints(
        &self,
        compartment_id: &str,
        opts: &ListDbManagementPrivateEndpointsOptions,
    ) -> Result<Response<DbManagementPrivateEndpointCollection>, ApiError> {
        let descriptor = self.build_list_db_management_private_endpoints(compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_delete_db_management_private_endpoint(
        &self,
        private_endpoint_id: &str,
        opts: &IfMatchOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Delete,
            "/dbManagementPrivateEndpoints/{dbManagementPrivateEndpointId}",
            "DeleteDbManagementPrivateEndpoint",
        )
        .path_param("dbManagementPrivateEndpointId", private_endpoint_id)
        .if_match(opts.if_match.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    /// Deletion is asynchronous; track it with the returned
    /// `opc-work-request-id`.
    pub fn delete_db_management_private_endpoint(
        &self,
        private_endpoint_id: &str,
        opts: &IfMatchOptions,
    ) -> Result<Response<()>, ApiError> {
        let descriptor = self.build_delete_db_management_private_endpoint(private_endpoint_id, opts)?;
        self.executor.execute_empty(descriptor, &opts.call)
    }

    // Fleet and AWR metrics

    pub fn build_get_database_fleet_health_metrics(
        &self,
        compare_baseline_time: &str,
        compare_target_time: &str,
        opts: &GetDatabaseFleetHealthMetricsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/fleetMetrics",
            "GetDatabaseFleetHealthMetrics",
        )
        .required_query("compareBaselineTime", compare_baseline_time)
        .required_query("compareTargetTime", compare_target_time)
        .query("managedDatabaseGroupId", opts.managed_database_group_id.as_deref())
        .query("compartmentId", opts.compartment_id.as_deref())
        .query_enum("compareType", opts.compare_type)
        .query("filterByMetricNames", opts.filter_by_metric_names.as_deref())
        .query_enum_list(
            "filterByDatabaseType",
            &opts.filter_by_database_type,
            CollectionFormat::Csv,
        )
        .query_enum_list(
            "filterByDatabaseSubType",
            &opts.filter_by_database_sub_type,
            CollectionFormat::Csv,
        )
        .query_enum_list(
            "filterByDatabaseDeploymentType",
            &opts.filter_by_database_deployment_type,
            CollectionFormat::Csv,
        )
        .query("filterByDatabaseVersion", opts.filter_by_database_version.as_deref())
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn get_database_fleet_health_metrics(
        &self,
        compare_baseline_time: &str,
        compare_target_time: &str,
        opts: &GetDatabaseFleetHealthMetricsOptions,
    ) -> Result<Response<DatabaseFleetHealthMetrics>, ApiError> {
        let descriptor = self.build_get_database_fleet_health_metrics(
            compare_baseline_time,
            compare_target_time,
            opts,
        )?;
        self.executor.execute(descriptor, &opts.call)
    }

    /// `names` is sent as one `name=` pair per metric.
    pub fn build_summarize_awr_db_metrics(
        &self,
        managed_database_id: &str,
        awr_db_id: &str,
        names: &[String],
        opts: &SummarizeAwrDbMetricsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/awrDbs/{awrDbId}/metrics",
            "SummarizeAwrDbMetrics",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .path_param("awrDbId", awr_db_id)
        .required_query_list("name", names, CollectionFormat::Multi)
        .query("instNum", opts.inst_num.as_deref())
        .query("beginSnIdGreaterThanOrEqualTo", opts.begin_sn_id_greater_than_or_equal_to)
        .query("endSnIdLessThanOrEqualTo", opts.end_sn_id_less_than_or_equal_to)
        .query_time("timeGreaterThanOrEqualTo", opts.time_greater_than_or_equal_to.as_ref())
        .query_time("timeLessThanOrEqualTo", opts.time_less_than_or_equal_to.as_ref())
        .query("sessionType", opts.session_type.as_deref())
        .query("containerId", opts.container_id)
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn summarize_awr_db_metrics(
        &self,
        managed_database_id: &str,
        awr_db_id: &str,
        names: &[String],
        opts: &SummarizeAwrDbMetricsOptions,
    ) -> Result<Response<AwrDbMetricCollection>, ApiError> {
        let descriptor =
            self.build_summarize_awr_db_metrics(managed_database_id, awr_db_id, names, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    // Work requests

    pub fn build_get_work_request(
        &self,
        work_request_id: &str,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(HttpMethod::Get, "/workRequests/{workRequestId}", "GetWorkRequest")
            .path_param("workRequestId", work_request_id)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn get_work_request(
        &self,
        work_request_id: &str,
        opts: &RequestOptions,
    ) -> Result<Response<WorkRequest>, ApiError> {
        let descriptor = self.build_get_work_request(work_request_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_work_requests(
        &self,
        compartment_id: &str,
        opts: &ListWorkRequestsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(HttpMethod::Get, "/workRequests", "ListWorkRequests")
            .required_query("compartmentId", compartment_id)
            .query("resourceId", opts.resource_id.as_deref())
            .query_enum("status", opts.status)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .query_enum("sortBy", opts.sort_by)
            .query_enum("sortOrder", opts.sort_order)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn list_work_requests(
        &self,
        compartment_id: &str,
        opts: &ListWorkRequestsOptions,
    ) -> Result<Response<WorkRequestCollection>, ApiError> {
        let descriptor = self.build_list_work_requests(compartment_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }
}
