use serde::{Deserialize, Serialize};

use crate::enums::api_enum;

api_enum! {
    pub enum TablespaceType {
        Undo => "UNDO",
        Permanent => "PERMANENT",
        Temporary => "TEMPORARY",
    }
}

api_enum! {
    pub enum TablespaceStatus {
        Online => "ONLINE",
        Offline => "OFFLINE",
        ReadOnly => "READ_ONLY",
    }
}

api_enum! {
    pub enum TablespaceSortBy {
        Name => "NAME",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablespaceSummary {
    pub name: String,
    #[serde(rename = "type", default)]
    pub tablespace_type: Option<TablespaceType>,
    #[serde(default)]
    pub status: Option<TablespaceStatus>,
    #[serde(default)]
    pub block_size_bytes: Option<f64>,
    #[serde(default)]
    pub is_bigfile: Option<bool>,
    #[serde(default)]
    pub allocated_size_kb: Option<f64>,
    #[serde(default)]
    pub used_space_kb: Option<f64>,
    #[serde(default)]
    pub used_percent_allocated: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablespaceCollection {
    pub items: Vec<TablespaceSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datafile {
    pub name: String,
    #[serde(default)]
    pub size_kb: Option<f64>,
    #[serde(default)]
    pub is_auto_extensible: Option<bool>,
    #[serde(default)]
    pub max_size_kb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tablespace {
    pub name: String,
    #[serde(rename = "type", default)]
    pub tablespace_type: Option<TablespaceType>,
    #[serde(default)]
    pub status: Option<TablespaceStatus>,
    #[serde(default)]
    pub block_size_bytes: Option<f64>,
    #[serde(default)]
    pub is_bigfile: Option<bool>,
    #[serde(default)]
    pub allocated_size_kb: Option<f64>,
    #[serde(default)]
    pub used_space_kb: Option<f64>,
    #[serde(default)]
    pub datafiles: Vec<Datafile>,
}
