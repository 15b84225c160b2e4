use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};
use crate::enums::api_enum;

api_enum! {
    pub enum ServiceEnvironmentStatus {
        Initialized => "INITIALIZED",
        BeginActivation => "BEGIN_ACTIVATION",
        Active => "ACTIVE",
        BeginSoftTermination => "BEGIN_SOFT_TERMINATION",
        SoftTerminated => "SOFT_TERMINATED",
        BeginTermination => "BEGIN_TERMINATION",
        CanceledTermination => "CANCELED_TERMINATION",
        Terminated => "TERMINATED",
        BeginDisabling => "BEGIN_DISABLING",
        BeginEnabling => "BEGIN_ENABLING",
        BeginMigration => "BEGIN_MIGRATION",
        Disabled => "DISABLED",
        BeginSuspension => "BEGIN_SUSPENSION",
        BeginResumption => "BEGIN_RESUMPTION",
        Suspended => "SUSPENDED",
        BeginLockRelocation => "BEGIN_LOCK_RELOCATION",
        LockedRelocation => "LOCKED_RELOCATION",
        BeginRelocation => "BEGIN_RELOCATION",
        Relocated => "RELOCATED",
        BeginUnlockRelocation => "BEGIN_UNLOCK_RELOCATION",
        UnlockedRelocation => "UNLOCKED_RELOCATION",
        FailedLockRelocation => "FAILED_LOCK_RELOCATION",
        FailedActivation => "FAILED_ACTIVATION",
        FailedMigration => "FAILED_MIGRATION",
        AccessDisabled => "ACCESS_DISABLED",
        BeginDisablingAccess => "BEGIN_DISABLING_ACCESS",
        BeginEnablingAccess => "BEGIN_ENABLING_ACCESS",
        TraUnknown => "TRA_UNKNOWN",
    }
}

api_enum! {
    pub enum ServiceEnvironmentSortBy {
        Id => "ID",
    }
}

api_enum! {
    pub enum ServiceEnvironmentEndpointType {
        InstanceUrlProd => "INSTANCE_URL_PROD",
        InstanceUrlTest => "INSTANCE_URL_TEST",
        InventoryUrlProd => "INVENTORY_URL_PROD",
        InventoryUrlTest => "INVENTORY_URL_TEST",
        Jcs => "JCS",
        JcsTest => "JCS_TEST",
        ApplicationUrlProd => "APPLICATION_URL_PROD",
        ApplicationUrlTest => "APPLICATION_URL_TEST",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[serde(rename = "type")]
    pub definition_type: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub short_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEnvironmentEndPointOverview {
    pub environment_type: ServiceEnvironmentEndpointType,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEnvironment {
    pub id: String,
    pub subscription_id: String,
    pub status: ServiceEnvironmentStatus,
    pub compartment_id: String,
    pub service_definition: ServiceDefinition,
    #[serde(default)]
    pub console_url: Option<String>,
    #[serde(default)]
    pub service_environment_endpoints: Vec<ServiceEnvironmentEndPointOverview>,
    #[serde(default)]
    pub freeform_tags: FreeformTags,
    #[serde(default)]
    pub defined_tags: DefinedTags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEnvironmentSummary {
    pub id: String,
    pub subscription_id: String,
    pub status: ServiceEnvironmentStatus,
    pub compartment_id: String,
    pub service_definition: ServiceDefinition,
    #[serde(default)]
    pub console_url: Option<String>,
    #[serde(default)]
    pub service_environment_endpoints: Vec<ServiceEnvironmentEndPointOverview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEnvironmentCollection {
    pub items: Vec<ServiceEnvironmentSummary>,
}
