//! SQL Tuning Advisor tasks and SQL tuning sets.

use chrono::{DateTime, Utc};

use super::RequestOptions;
use crate::descriptor::RequestDescriptor;
use crate::enums::SortOrder;
use crate::error::ApiError;
use crate::executor::{CallSettings, Executor};
use crate::http::HttpMethod;
use crate::models::*;
use crate::response::Response;

#[derive(Debug, Clone)]
pub struct SqlTuningClient {
    executor: Executor,
}

client_common!(SqlTuningClient);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSqlTuningAdvisorTasksOptions {
    pub name: Option<String>,
    pub status: Option<SqlTuningTaskStatus>,
    pub time_greater_than_or_equal_to: Option<DateTime<Utc>>,
    pub time_less_than_or_equal_to: Option<DateTime<Utc>>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<SqlTuningAdvisorTaskSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSqlTuningSetsOptions {
    pub owner: Option<String>,
    pub name_contains: Option<String>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub sort_by: Option<SqlTuningSetSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

impl SqlTuningClient {
    pub fn build_list_sql_tuning_advisor_tasks(
        &self,
        managed_database_id: &str,
        opts: &ListSqlTuningAdvisorTasksOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/sqlTuningAdvisorTasks",
            "ListSqlTuningAdvisorTasks",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query("name", opts.name.as_deref())
        .query_enum("status", opts.status)
        .query_time("timeGreaterThanOrEqualTo", opts.time_greater_than_or_equal_to.as_ref())
        .query_time("timeLessThanOrEqualTo", opts.time_less_than_or_equal_to.as_ref())
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_sql_tuning_advisor_tasks(
        &self,
        managed_database_id: &str,
        opts: &ListSqlTuningAdvisorTasksOptions,
    ) -> Result<Response<SqlTuningAdvisorTaskCollection>, ApiError> {
        let descriptor = self.build_list_sql_tuning_advisor_tasks(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_start_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &StartSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabases/{managedDatabaseId}/actions/startSqlTuningTask",
            "StartSqlTuningTask",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn start_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &StartSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<Response<SqlTuningTaskReturn>, ApiError> {
        let descriptor = self.build_start_sql_tuning_task(managed_database_id, details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_clone_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &CloneSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabases/{managedDatabaseId}/actions/cloneSqlTuningTask",
            "CloneSqlTuningTask",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn clone_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &CloneSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<Response<SqlTuningTaskReturn>, ApiError> {
        let descriptor = self.build_clone_sql_tuning_task(managed_database_id, details, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_drop_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &DropSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Post,
            "/managedDatabases/{managedDatabaseId}/actions/dropSqlTuningTask",
            "DropSqlTuningTask",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .opc_request_id(opts.opc_request_id.as_deref())
        .json_body(details)
        .build()
    }

    pub fn drop_sql_tuning_task(
        &self,
        managed_database_id: &str,
        details: &DropSqlTuningTaskDetails,
        opts: &RequestOptions,
    ) -> Result<Response<()>, ApiError> {
        let descriptor = self.build_drop_sql_tuning_task(managed_database_id, details, opts)?;
        self.executor.execute_empty(descriptor, &opts.call)
    }

    pub fn build_list_sql_tuning_sets(
        &self,
        managed_database_id: &str,
        opts: &ListSqlTuningSetsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/sqlTuningSets",
            "ListSqlTuningSets",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query("owner", opts.owner.as_deref())
        .query("nameContains", opts.name_contains.as_deref())
        .query("page", opts.page.as_deref())
        .query("limit", opts.limit)
        .query_enum("sortBy", opts.sort_by)
        .query_enum("sortOrder", opts.sort_order)
        .opc_request_id(opts.opc_request_id.as_deref())
        .build()
    }

    pub fn list_sql_tuning_sets(
        &self,
        managed_database_id: &str,
        opts: &ListSqlTuningSetsOptions,
    ) -> Result<Response<SqlTuningSetCollection>, ApiError> {
        let descriptor = self.build_list_sql_tuning_sets(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }
}
