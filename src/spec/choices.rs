// Boundary validation for user-supplied filter choices.
// Each parser takes the raw text of one answer and either returns a typed
// value or a SpecError the caller can show before asking again.

use crate::catalog::ContestCategory;
use crate::spec::filter_spec::{FilterSpec, SpecError, POSITION_MAX, POSITION_MIN};

pub const RATING_MIN: u32 = 800;
pub const RATING_MAX: u32 = 3500;
pub const RECENT_CONTESTS_MAX: usize = 500;
pub const MAX_RESULTS_MAX: usize = 1000;
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Blank input yields `default`; anything else must be an integer in
/// `[min, max]`.
pub fn parse_bounded(input: &str, min: i64, max: i64, default: i64) -> Result<i64, SpecError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| SpecError::NotANumber(trimmed.to_string()))?;

    if value < min || value > max {
        return Err(SpecError::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// The upper bound is checked against the already-accepted lower bound.
pub fn parse_rating_range(lower: &str, upper: &str) -> Result<(u32, u32), SpecError> {
    let (min, max) = (i64::from(RATING_MIN), i64::from(RATING_MAX));
    let lower = parse_bounded(lower, min, max, min)?;
    let upper = parse_bounded(upper, lower, max, max)?;
    Ok((to_u32(lower)?, to_u32(upper)?))
}

/// Menu: 1 Educational, 2 Div 2, 3 Div 1+2, 4 Div 3, 5 Div 4, 6 no preference.
pub fn parse_category_choice(input: &str) -> Result<Option<ContestCategory>, SpecError> {
    let choice = parse_bounded(input, 1, 6, 6)?;
    Ok(match choice {
        1 => Some(ContestCategory::Educational),
        2 => Some(ContestCategory::Div2),
        3 => Some(ContestCategory::Div1And2),
        4 => Some(ContestCategory::Div3),
        5 => Some(ContestCategory::Div4),
        _ => None,
    })
}

/// Accepts "", "0" (every position), "n" (exactly n) or "a b" (a through b).
pub fn parse_position_range(input: &str) -> Result<(u32, u32), SpecError> {
    let values = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SpecError::NotANumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (min, max) = (i64::from(POSITION_MIN), i64::from(POSITION_MAX));
    let in_range = |value: i64| {
        if (min..=max).contains(&value) {
            to_u32(value)
        } else {
            Err(SpecError::OutOfRange { value, min, max })
        }
    };

    match values.as_slice() {
        [] | [0] => Ok((POSITION_MIN, POSITION_MAX)),
        [only] => {
            let position = in_range(*only)?;
            Ok((position, position))
        }
        [start, end] => {
            let (start, end) = (in_range(*start)?, in_range(*end)?);
            if start > end {
                return Err(SpecError::PositionBoundsInverted { start, end });
            }
            Ok((start, end))
        }
        more => Err(SpecError::TooManyValues(more.len())),
    }
}

pub fn parse_recent_contest_count(input: &str) -> Result<usize, SpecError> {
    let max = RECENT_CONTESTS_MAX as i64;
    parse_bounded(input, 1, max, max).and_then(to_usize)
}

pub fn parse_max_results(input: &str) -> Result<usize, SpecError> {
    parse_bounded(input, 1, MAX_RESULTS_MAX as i64, DEFAULT_MAX_RESULTS as i64).and_then(to_usize)
}

/// Raw answers to the filter questionnaire, one string per question.
#[derive(Debug, Clone, Default)]
pub struct FilterChoices {
    pub rating_lower: String,
    pub rating_upper: String,
    pub contest_category: String,
    pub positions: String,
    pub recent_contests: String,
    pub max_results: String,
}

impl FilterChoices {
    pub fn into_spec(self) -> Result<FilterSpec, SpecError> {
        let (rating_lower, rating_upper) = parse_rating_range(&self.rating_lower, &self.rating_upper)?;
        let (position_start, position_end) = parse_position_range(&self.positions)?;

        let spec = FilterSpec {
            rating_lower: Some(rating_lower),
            rating_upper: Some(rating_upper),
            contest_category: parse_category_choice(&self.contest_category)?,
            position_start: Some(position_start),
            position_end: Some(position_end),
            recent_contest_count: Some(parse_recent_contest_count(&self.recent_contests)?),
            max_results: Some(parse_max_results(&self.max_results)?),
        };
        spec.validate()?;
        Ok(spec)
    }
}

fn to_u32(value: i64) -> Result<u32, SpecError> {
    u32::try_from(value).map_err(|_| SpecError::OutOfRange {
        value,
        min: 0,
        max: i64::from(u32::MAX),
    })
}

fn to_usize(value: i64) -> Result<usize, SpecError> {
    usize::try_from(value).map_err(|_| SpecError::OutOfRange {
        value,
        min: 0,
        max: i64::try_from(usize::MAX).unwrap_or(i64::MAX),
    })
}
