use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordAction {
    PickupPointValidate,
}

impl RecordAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordAction::PickupPointValidate => "pickup-point-validate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub action: RecordAction,
    pub status: RecordStatus,
    pub title: String,
    pub params: BTreeMap<String, serde_json::Value>,
    pub date: DateTime<Utc>,
}

impl Record {
    pub fn new(action: RecordAction, status: RecordStatus, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            status,
            title: title.into(),
            params: BTreeMap::new(),
            date: Utc::now(),
        }
    }

    pub fn with_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
