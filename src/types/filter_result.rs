use std::fmt;

use serde::Serialize;

use crate::catalog::Problem;
use crate::spec::SpecError;

/// Which kind of catalog record a malformed-record error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Problem,
    Contest,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Problem => f.write_str("problem"),
            RecordKind::Contest => f.write_str("contest"),
        }
    }
}

/// Pipeline stage, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Gym,
    Rating,
    Category,
    Position,
    Recency,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::Gym => "gym exclusion",
            Check::Rating => "rating filter",
            Check::Category => "category filter",
            Check::Position => "position filter",
            Check::Recency => "recency window",
        };
        f.write_str(name)
    }
}

/// Counters describing how a filtering pass narrowed the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct FilterMetadata {
    pub problems_considered: usize,

    pub excluded_by_gym: usize,
    pub excluded_by_rating: usize,
    pub excluded_by_category: usize,
    pub excluded_by_position: usize,
    pub excluded_by_recency: usize,
    pub excluded_by_limit: usize,

    /// Size of the recency window, when one was applied.
    pub recency_window: Option<usize>,
    pub problems_returned: usize,
}

impl FilterMetadata {
    pub(crate) fn record_exclusion(&mut self, check: Check) {
        match check {
            Check::Gym => self.excluded_by_gym += 1,
            Check::Rating => self.excluded_by_rating += 1,
            Check::Category => self.excluded_by_category += 1,
            Check::Position => self.excluded_by_position += 1,
            Check::Recency => self.excluded_by_recency += 1,
        }
    }
}

/// The final result of a filtering pass: problems in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct FilterResult {
    pub problems: Vec<Problem>,
    pub filter: FilterMetadata,
}

impl FilterResult {
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Problemset links, in result order. Problems without an index have no
    /// link and are skipped.
    pub fn links(&self) -> Vec<String> {
        self.problems.iter().filter_map(Problem::link).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid filter spec: {0}")]
    InvalidSpec(#[from] SpecError),

    #[error("Malformed {kind} record at position {position}: missing `{field}` (needed by {check})")]
    MalformedRecord {
        kind: RecordKind,
        position: usize,
        field: &'static str,
        check: Check,
    },
}
