use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum UserStatus {
        Open => "OPEN",
        Expired => "EXPIRED",
        ExpiredGrace => "EXPIRED_GRACE",
        Locked => "LOCKED",
        LockedTimed => "LOCKED_TIMED",
        ExpiredAndLocked => "EXPIRED_AND_LOCKED",
    }
}

api_enum! {
    pub enum UserSortBy {
        Name => "NAME",
        TimeCreated => "TIMECREATED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub name: String,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub default_tablespace: Option<String>,
    #[serde(default)]
    pub temp_tablespace: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_expiring: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCollection {
    pub items: Vec<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub default_tablespace: Option<String>,
    #[serde(default)]
    pub temp_tablespace: Option<String>,
    #[serde(default)]
    pub local_temp_tablespace: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub consumer_group: Option<String>,
    #[serde(default)]
    pub authentication: Option<String>,
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_expiring: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_locked: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_last_login: Option<DateTime<Utc>>,
}
