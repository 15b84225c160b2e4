//! Alert and attention log queries for managed databases.

use chrono::{DateTime, Utc};

use crate::descriptor::{RequestDescriptor, RequestDescriptorBuilder};
use crate::enums::SortOrder;
use crate::error::ApiError;
use crate::executor::{CallSettings, Executor};
use crate::http::HttpMethod;
use crate::models::*;
use crate::response::Response;

/// Client for the diagnosability operations of the Database Management
/// service (`/20201101`).
#[derive(Debug, Clone)]
pub struct DiagnosabilityClient {
    executor: Executor,
}

client_common!(DiagnosabilityClient);

/// Filters shared by the four log operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub time_greater_than_or_equal_to: Option<DateTime<Utc>>,
    pub time_less_than_or_equal_to: Option<DateTime<Utc>>,
    pub type_filter: Option<LogTypeFilter>,
    pub log_search_text: Option<String>,
    pub is_regular_expression: Option<bool>,
}

impl LogFilter {
    fn apply(&self, builder: RequestDescriptorBuilder) -> RequestDescriptorBuilder {
        builder
            .query_time("timeGreaterThanOrEqualTo", self.time_greater_than_or_equal_to.as_ref())
            .query_time("timeLessThanOrEqualTo", self.time_less_than_or_equal_to.as_ref())
            .query_enum("typeFilter", self.type_filter)
            .query("logSearchText", self.log_search_text.as_deref())
            .query("isRegularExpression", self.is_regular_expression)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAlertLogsOptions {
    pub filter: LogFilter,
    pub level_filter: Option<AlertLogLevelFilter>,
    pub sort_by: Option<AlertLogSortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAttentionLogsOptions {
    pub filter: LogFilter,
    pub urgency_filter: Option<AttentionLogUrgencyFilter>,
    pub sort_by: Option<AttentionLogSortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizeAlertLogCountsOptions {
    pub filter: LogFilter,
    pub level_filter: Option<AlertLogLevelFilter>,
    pub group_by: Option<AlertLogGroupBy>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizeAttentionLogCountsOptions {
    pub filter: LogFilter,
    pub urgency_filter: Option<AttentionLogUrgencyFilter>,
    pub group_by: Option<AttentionLogGroupBy>,
    pub page: Option<String>,
    pub limit: Option<u32>,
    pub opc_request_id: Option<String>,
    pub call: CallSettings,
}

impl DiagnosabilityClient {
    pub fn build_list_alert_logs(
        &self,
        managed_database_id: &str,
        opts: &ListAlertLogsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        let builder = RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/alertLogs",
            "ListAlertLogs",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query_enum("levelFilter", opts.level_filter);
        opts.filter
            .apply(builder)
            .query_enum("sortBy", opts.sort_by)
            .query_enum("sortOrder", opts.sort_order)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn list_alert_logs(
        &self,
        managed_database_id: &str,
        opts: &ListAlertLogsOptions,
    ) -> Result<Response<AlertLogCollection>, ApiError> {
        let descriptor = self.build_list_alert_logs(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_list_attention_logs(
        &self,
        managed_database_id: &str,
        opts: &ListAttentionLogsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        let builder = RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/attentionLogs",
            "ListAttentionLogs",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query_enum("urgencyFilter", opts.urgency_filter);
        opts.filter
            .apply(builder)
            .query_enum("sortBy", opts.sort_by)
            .query_enum("sortOrder", opts.sort_order)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn list_attention_logs(
        &self,
        managed_database_id: &str,
        opts: &ListAttentionLogsOptions,
    ) -> Result<Response<AttentionLogCollection>, ApiError> {
        let descriptor = self.build_list_attention_logs(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_summarize_alert_log_counts(
        &self,
        managed_database_id: &str,
        opts: &SummarizeAlertLogCountsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        let builder = RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/alertLogCounts",
            "SummarizeAlertLogCounts",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query_enum("levelFilter", opts.level_filter);
        opts.filter
            .apply(builder)
            .query_enum("groupBy", opts.group_by)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn summarize_alert_log_counts(
        &self,
        managed_database_id: &str,
        opts: &SummarizeAlertLogCountsOptions,
    ) -> Result<Response<AlertLogCountsCollection>, ApiError> {
        let descriptor = self.build_summarize_alert_log_counts(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }

    pub fn build_summarize_attention_log_counts(
        &self,
        managed_database_id: &str,
        opts: &SummarizeAttentionLogCountsOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        let builder = RequestDescriptor::builder(
            HttpMethod::Get,
            "/managedDatabases/{managedDatabaseId}/attentionLogCounts",
            "SummarizeAttentionLogCounts",
        )
        .path_param("managedDatabaseId", managed_database_id)
        .query_enum("urgencyFilter", opts.urgency_filter);
        opts.filter
            .apply(builder)
            .query_enum("groupBy", opts.group_by)
            .query("page", opts.page.as_deref())
            .query("limit", opts.limit)
            .opc_request_id(opts.opc_request_id.as_deref())
            .build()
    }

    pub fn summarize_attention_log_counts(
        &self,
        managed_database_id: &str,
        opts: &SummarizeAttentionLogCountsOptions,
    ) -> Result<Response<AttentionLogCountsCollection>, ApiError> {
        let descriptor = self.build_summarize_attention_log_counts(managed_database_id, opts)?;
        self.executor.execute(descriptor, &opts.call)
    }
}
