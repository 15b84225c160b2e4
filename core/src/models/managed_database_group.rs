use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DatabaseSubType, DatabaseType, DefinedTags, DeploymentType, FreeformTags};
use crate::enums::api_enum;

api_enum! {
    pub enum ManagedDatabaseGroupLifecycleState {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
        Inactive => "INACTIVE",
    }
}

api_enum! {
    pub enum ManagedDatabaseGroupSortBy {
        TimeCreated => "TIMECREATED",
        Name => "NAME",
    }
}

/// A member of a managed database group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildDatabase {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub database_type: Option<DatabaseType>,
    #[serde(default)]
    pub database_sub_type: Option<DatabaseSubType>,
    #[serde(default)]
    pub deployment_type: Option<DeploymentType>,
    #[serde(default)]
    pub time_added: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabaseGroup {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub managed_databases: Vec<ChildDatabase>,
    #[serde(default)]
    pub lifecycle_state: Option<ManagedDatabaseGroupLifecycleState>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabaseGroupSummary {
    pub id: String,
    pub name: String,
    pub compartment_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub managed_database_count: Option<u32>,
    #[serde(default)]
    pub lifecycle_state: Option<ManagedDatabaseGroupLifecycleState>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseGroupCollection {
    pub items: Vec<ManagedDatabaseGroupSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedDatabaseGroupDetails {
    pub name: String,
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagedDatabaseGroupDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddManagedDatabaseToManagedDatabaseGroupDetails {
    pub managed_database_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveManagedDatabaseFromManagedDatabaseGroupDetails {
    pub managed_database_id: String,
}
