use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum SqlTuningTaskStatus {
        Initial => "INITIAL",
        Executing => "EXECUTING",
        Interrupted => "INTERRUPTED",
        Completed => "COMPLETED",
        Error => "ERROR",
    }
}

api_enum! {
    pub enum SqlTuningAdvisorTaskSortBy {
        Name => "NAME",
        StartTime => "START_TIME",
    }
}

api_enum! {
    pub enum SqlTuningSetSortBy {
        Name => "NAME",
    }
}

api_enum! {
    pub enum SqlTuningTaskScope {
        Limited => "LIMITED",
        Comprehensive => "COMPREHENSIVE",
    }
}

api_enum! {
    pub enum DatabaseCredentialRole {
        Normal => "NORMAL",
        Sysdba => "SYSDBA",
    }
}

/// Database credentials used to run a tuning task, discriminated on the
/// wire by `sqlTuningTaskCredentialType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sqlTuningTaskCredentialType")]
pub enum SqlTuningTaskCredentialDetails {
    #[serde(rename = "PASSWORD", rename_all = "camelCase")]
    Password {
        username: String,
        password: String,
        role: DatabaseCredentialRole,
    },
    #[serde(rename = "SECRET", rename_all = "camelCase")]
    Secret {
        username: String,
        password_secret_id: String,
        role: DatabaseCredentialRole,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTuningAdvisorTaskSummary {
    pub sql_tuning_advisor_task_id: i64,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub task_status: Option<SqlTuningTaskStatus>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_execution_started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_execution_ended: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recommendation_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlTuningAdvisorTaskCollection {
    pub items: Vec<SqlTuningAdvisorTaskSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTuningTaskSqlDetail {
    pub sql_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSqlTuningTaskDetails {
    pub task_name: String,
    pub credential_details: SqlTuningTaskCredentialDetails,
    pub total_time_limit_in_minutes: u32,
    pub scope: SqlTuningTaskScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_time_limit_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_details: Option<Vec<SqlTuningTaskSqlDetail>>,
    pub time_started: DateTime<Utc>,
    pub time_ended: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneSqlTuningTaskDetails {
    pub task_name: String,
    pub original_task_id: i64,
    pub credential_details: SqlTuningTaskCredentialDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropSqlTuningTaskDetails {
    pub task_id: i64,
    pub credential_details: SqlTuningTaskCredentialDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTuningTaskReturn {
    pub sql_tuning_task_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTuningSetSummary {
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub statement_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlTuningSetCollection {
    pub items: Vec<SqlTuningSetSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_details_are_tagged() {
        let creds = SqlTuningTaskCredentialDetails::Secret {
            username: "dbsnmp".into(),
            password_secret_id: "ocid1.vaultsecret.1".into(),
            role: DatabaseCredentialRole::Normal,
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["sqlTuningTaskCredentialType"], "SECRET");
        assert_eq!(json["passwordSecretId"], "ocid1.vaultsecret.1");
        assert_eq!(json["role"], "NORMAL");

        let back: SqlTuningTaskCredentialDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, creds);
    }
}
