use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum PrivateEndpointLifecycleState {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

api_enum! {
    pub enum PrivateEndpointSortBy {
        TimeCreated => "TIMECREATED",
        Name => "NAME",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbManagementPrivateEndpoint {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    #[serde(default)]
    pub is_cluster: Option<bool>,
    #[serde(default)]
    pub vcn_id: Option<String>,
    pub subnet_id: String,
    #[serde(default)]
    pub private_ip: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nsg_ids: Vec<String>,
    #[serde(default)]
    pub lifecycle_state: Option<PrivateEndpointLifecycleState>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbManagementPrivateEndpointSummary {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    #[serde(default)]
    pub is_cluster: Option<bool>,
    #[serde(default)]
    pub vcn_id: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<PrivateEndpointLifecycleState>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbManagementPrivateEndpointCollection {
    pub items: Vec<DbManagementPrivateEndpointSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbManagementPrivateEndpointDetails {
    pub name: String,
    pub compartment_id: String,
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cluster: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,
}
