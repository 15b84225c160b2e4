use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum AlertLogLevelFilter {
        Critical => "CRITICAL",
        Severe => "SEVERE",
        Important => "IMPORTANT",
        Normal => "NORMAL",
        All => "ALL",
    }
}

api_enum! {
    pub enum AttentionLogUrgencyFilter {
        Urgent => "URGENT",
        Serious => "SERIOUS",
        Important => "IMPORTANT",
        Normal => "NORMAL",
        All => "ALL",
    }
}

api_enum! {
    /// Message type filter shared by alert and attention log queries.
    pub enum LogTypeFilter {
        Unknown => "UNKNOWN",
        IncidentError => "INCIDENT_ERROR",
        Error => "ERROR",
        Warning => "WARNING",
        Notification => "NOTIFICATION",
        Trace => "TRACE",
        All => "ALL",
    }
}

api_enum! {
    pub enum AlertLogSortBy {
        Timestamp => "TIMESTAMP",
        MessageLevel => "MESSAGE_LEVEL",
        MessageType => "MESSAGE_TYPE",
    }
}

api_enum! {
    pub enum AttentionLogSortBy {
        Timestamp => "TIMESTAMP",
        MessageType => "MESSAGE_TYPE",
        Urgency => "URGENCY",
    }
}

api_enum! {
    pub enum AlertLogGroupBy {
        Level => "LEVEL",
        Type => "TYPE",
    }
}

api_enum! {
    pub enum AttentionLogGroupBy {
        Urgency => "URGENCY",
        Type => "TYPE",
    }
}

api_enum! {
    pub enum MessageLevel {
        Critical => "CRITICAL",
        Severe => "SEVERE",
        Important => "IMPORTANT",
        Normal => "NORMAL",
    }
}

api_enum! {
    pub enum MessageType {
        Unknown => "UNKNOWN",
        IncidentError => "INCIDENT_ERROR",
        Error => "ERROR",
        Warning => "WARNING",
        Notification => "NOTIFICATION",
        Trace => "TRACE",
    }
}

api_enum! {
    pub enum Urgency {
        Immediate => "IMMEDIATE",
        Soon => "SOON",
        Deferrable => "DEFERRABLE",
        Info => "INFO",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLogSummary {
    pub message_level: MessageLevel,
    pub message_type: MessageType,
    #[serde(default)]
    pub message_content: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub supplemental_detail: Option<String>,
    #[serde(default)]
    pub file_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLogCollection {
    pub managed_database_id: String,
    pub items: Vec<AlertLogSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionLogSummary {
    pub urgency: Urgency,
    pub message_type: MessageType,
    #[serde(default)]
    pub message_content: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub target_user: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub file_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionLogCollection {
    pub managed_database_id: String,
    pub items: Vec<AttentionLogSummary>,
}

/// One bucket of a count summary; `category` is a level, urgency, or
/// message type depending on the requested grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCountSummary {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLogCountsCollection {
    pub managed_database_id: String,
    pub items: Vec<LogCountSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionLogCountsCollection {
    pub managed_database_id: String,
    pub items: Vec<LogCountSummary>,
}
