use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};
use crate::enums::api_enum;

api_enum! {
    pub enum DatabaseType {
        ExternalSidb => "EXTERNAL_SIDB",
        ExternalRac => "EXTERNAL_RAC",
        CloudSidb => "CLOUD_SIDB",
        CloudRac => "CLOUD_RAC",
        Shared => "SHARED",
        Dedicated => "DEDICATED",
    }
}

api_enum! {
    pub enum DatabaseSubType {
        Cdb => "CDB",
        Pdb => "PDB",
        NonCdb => "NON_CDB",
        Acd => "ACD",
        Adb => "ADB",
    }
}

api_enum! {
    pub enum DeploymentType {
        Onpremise => "ONPREMISE",
        Bm => "BM",
        Vm => "VM",
        Exadata => "EXADATA",
        ExadataCc => "EXADATA_CC",
        Autonomous => "AUTONOMOUS",
    }
}

api_enum! {
    pub enum ManagementOption {
        Basic => "BASIC",
        Advanced => "ADVANCED",
    }
}

api_enum! {
    pub enum WorkloadType {
        Oltp => "OLTP",
        Dw => "DW",
        Ajd => "AJD",
        Apex => "APEX",
    }
}

api_enum! {
    pub enum DatabaseStatus {
        Up => "UP",
        Down => "DOWN",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    pub enum ManagedDatabaseSortBy {
        TimeCreated => "TIMECREATED",
        Name => "NAME",
    }
}

/// A group the managed database belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub compartment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub database_type: Option<DatabaseType>,
    #[serde(default)]
    pub database_sub_type: Option<DatabaseSubType>,
    #[serde(default)]
    pub deployment_type: Option<DeploymentType>,
    #[serde(default)]
    pub management_option: Option<ManagementOption>,
    #[serde(default)]
    pub workload_type: Option<WorkloadType>,
    #[serde(default)]
    pub is_cluster: Option<bool>,
    /// The container database of a PDB, or the Exadata infrastructure.
    #[serde(default)]
    pub parent_container_id: Option<String>,
    #[serde(default)]
    pub managed_database_groups: Vec<ParentGroup>,
    #[serde(default)]
    pub database_status: Option<DatabaseStatus>,
    #[serde(default)]
    pub database_version: Option<String>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDatabaseSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub compartment_id: Option<String>,
    #[serde(default)]
    pub database_type: Option<DatabaseType>,
    #[serde(default)]
    pub database_sub_type: Option<DatabaseSubType>,
    #[serde(default)]
    pub deployment_type: Option<DeploymentType>,
    #[serde(default)]
    pub management_option: Option<ManagementOption>,
    #[serde(default)]
    pub is_cluster: Option<bool>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseCollection {
    pub items: Vec<ManagedDatabaseSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagedDatabaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}
