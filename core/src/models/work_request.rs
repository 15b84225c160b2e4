use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum WorkRequestStatus {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Waiting => "WAITING",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
    }
}

api_enum! {
    pub enum WorkRequestOperationType {
        EnableDatabaseManagement => "ENABLE_DATABASE_MANAGEMENT",
        ModifyDatabaseManagement => "MODIFY_DATABASE_MANAGEMENT",
        DisableDatabaseManagement => "DISABLE_DATABASE_MANAGEMENT",
        CreateDbManagementPrivateEndpoint => "CREATE_DB_MANAGEMENT_PRIVATE_ENDPOINT",
        DeleteDbManagementPrivateEndpoint => "DELETE_DB_MANAGEMENT_PRIVATE_ENDPOINT",
    }
}

api_enum! {
    pub enum WorkRequestSortBy {
        TimeAccepted => "TIMEACCEPTED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestResource {
    pub entity_type: String,
    #[serde(default)]
    pub action_type: Option<String>,
    pub identifier: String,
    #[serde(default)]
    pub entity_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequest {
    pub id: String,
    pub compartment_id: String,
    pub operation_type: WorkRequestOperationType,
    pub status: WorkRequestStatus,
    #[serde(default)]
    pub resources: Vec<WorkRequestResource>,
    #[serde(default)]
    pub percent_complete: Option<f32>,
    #[serde(default)]
    pub time_accepted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_finished: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRequestCollection {
    pub items: Vec<WorkRequest>,
}
