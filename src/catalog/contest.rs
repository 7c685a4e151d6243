use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::identifiers::ContestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
}

/// A contest record as published by the `contest.list` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContestId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<ContestPhase>,
    /// Used for recency ordering only; absent sorts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_seconds: Option<i64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Contest {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        phase: ContestPhase,
        start_time_seconds: Option<i64>,
    ) -> Self {
        Self {
            id: Some(ContestId::from(id)),
            name: name.into(),
            phase: Some(phase),
            start_time_seconds,
            extra: BTreeMap::new(),
        }
    }

    pub fn start_seconds(&self) -> i64 {
        self.start_time_seconds.unwrap_or(0)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start_time_seconds?, 0)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Some(ContestPhase::Finished)
    }
}
