use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::identifiers::ContestId;

pub const PROBLEMSET_BASE_URL: &str = "https://codeforces.com/problemset/problem";

/// A problem record as published by the `problemset.problems` endpoint.
///
/// Fields the engine does not interpret (name, tags, points, ...) are kept
/// verbatim in `extra` so results round-trip back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<ContestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Absent means unrated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Problem {
    pub fn new(contest_id: i64, index: impl Into<String>, rating: Option<u32>) -> Self {
        Self {
            contest_id: Some(ContestId::from(contest_id)),
            index: Some(index.into()),
            rating,
            extra: BTreeMap::new(),
        }
    }

    /// Attach a passthrough field, e.g. `name` or `tags`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn link(&self) -> Option<String> {
        let contest_id = self.contest_id?;
        let index = self.index.as_deref()?;
        Some(format!("{PROBLEMSET_BASE_URL}/{contest_id}/{index}"))
    }
}
