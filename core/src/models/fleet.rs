use serde::{Deserialize, Serialize};

use super::{DatabaseSubType, DatabaseType, DeploymentType};
use crate::enums::api_enum;

api_enum! {
    /// Width of the comparison window for fleet metrics.
    pub enum CompareType {
        Hour => "HOUR",
        Day => "DAY",
        Week => "WEEK",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetMetricDefinition {
    pub metric_name: String,
    #[serde(default)]
    pub baseline_value: Option<f64>,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub percentage_change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatusByCategory {
    #[serde(default)]
    pub database_type: Option<DatabaseType>,
    #[serde(default)]
    pub database_sub_type: Option<DatabaseSubType>,
    #[serde(default)]
    pub deployment_type: Option<DeploymentType>,
    #[serde(default)]
    pub inventory_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    #[serde(default)]
    pub aggregated_metrics: Vec<FleetMetricDefinition>,
    #[serde(default)]
    pub inventory: Vec<FleetStatusByCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseUsageMetrics {
    pub database_id: String,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub database_type: Option<DatabaseType>,
    #[serde(default)]
    pub database_sub_type: Option<DatabaseSubType>,
    #[serde(default)]
    pub deployment_type: Option<DeploymentType>,
    #[serde(default)]
    pub database_version: Option<String>,
    #[serde(default)]
    pub metrics: Vec<FleetMetricDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseFleetHealthMetrics {
    pub compare_baseline_time: String,
    pub compare_target_time: String,
    #[serde(default)]
    pub compare_type: Option<CompareType>,
    #[serde(default)]
    pub fleet_summary: Option<FleetSummary>,
    #[serde(default)]
    pub fleet_databases: Vec<DatabaseUsageMetrics>,
}
