use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ContestCategory;

pub const POSITION_MIN: u32 = 1;
pub const POSITION_MAX: u32 = 10;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Rating lower bound {lower} exceeds upper bound {upper}")]
    RatingBoundsInverted { lower: u32, upper: u32 },
    #[error("Position {0} is outside 1-10")]
    PositionOutOfRange(u32),
    #[error("Position start {start} exceeds position end {end}")]
    PositionBoundsInverted { start: u32, end: u32 },
    #[error("Position start and end must be set together")]
    PositionBoundMissing,
    #[error("Recent contest count must be positive")]
    ZeroRecentContestCount,
    #[error("Maximum result count must be positive")]
    ZeroMaxResults,
    #[error("Filter spec is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Not a valid integer: {0:?}")]
    NotANumber(String),
    #[error("Value {value} must be between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("Expected at most two values, got {0}")]
    TooManyValues(usize),
}

/// Immutable description of one filtering request.
///
/// Every field is optional; the default spec filters nothing except gym
/// problems. `contest_category: None` means "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSpec {
    pub rating_lower: Option<u32>,
    pub rating_upper: Option<u32>,
    pub contest_category: Option<ContestCategory>,
    pub position_start: Option<u32>,
    pub position_end: Option<u32>,
    pub recent_contest_count: Option<usize>,
    pub max_results: Option<usize>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rating(mut self, lower: Option<u32>, upper: Option<u32>) -> Self {
        self.rating_lower = lower;
        self.rating_upper = upper;
        self
    }

    pub fn with_category(mut self, category: ContestCategory) -> Self {
        self.contest_category = Some(category);
        self
    }

    pub fn with_positions(mut self, start: u32, end: u32) -> Self {
        self.position_start = Some(start);
        self.position_end = Some(end);
        self
    }

    pub fn with_recent_contests(mut self, count: usize) -> Self {
        self.recent_contest_count = Some(count);
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Parse a JSON config object and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        let spec: FilterSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if let (Some(lower), Some(upper)) = (self.rating_lower, self.rating_upper) {
            if lower > upper {
                return Err(SpecError::RatingBoundsInverted { lower, upper });
            }
        }

        match (self.position_start, self.position_end) {
            (None, None) => {}
            (Some(start), Some(end)) => {
                for position in [start, end] {
                    if !(POSITION_MIN..=POSITION_MAX).contains(&position) {
                        return Err(SpecError::PositionOutOfRange(position));
                    }
                }
                if start > end {
                    return Err(SpecError::PositionBoundsInverted { start, end });
                }
            }
            _ => return Err(SpecError::PositionBoundMissing),
        }

        if self.recent_contest_count == Some(0) {
            return Err(SpecError::ZeroRecentContestCount);
        }
        if self.max_results == Some(0) {
            return Err(SpecError::ZeroMaxResults);
        }

        Ok(())
    }

    pub fn has_rating_bounds(&self) -> bool {
        self.rating_lower.is_some() || self.rating_upper.is_some()
    }

    pub fn position_bounds(&self) -> Option<(u32, u32)> {
        Some((self.position_start?, self.position_end?))
    }
}
