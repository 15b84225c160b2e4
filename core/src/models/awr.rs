use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum AwrDbMetricSortBy {
        Timestamp => "TIMESTAMP",
        Name => "NAME",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwrDbMetricSummary {
    pub name: String,
    #[serde(default)]
    pub time_begin: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub avg_value: Option<f64>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwrDbMetricCollection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub db_query_time_in_secs: Option<f64>,
    #[serde(default)]
    pub query_key: Option<String>,
    #[serde(default)]
    pub items: Vec<AwrDbMetricSummary>,
}
