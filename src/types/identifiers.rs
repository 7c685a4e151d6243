use std::fmt;

use serde::{Deserialize, Serialize};

/// Contest ids at or above this value belong to the gym archive.
pub const GYM_CONTEST_ID_THRESHOLD: i64 = 100_000;

/// Identifier shared by a contest (`id`) and its problems (`contestId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(i64);

impl ContestId {
    pub fn new(raw: i64) -> Self {
        ContestId(raw)
    }

    /// Gym contests are user-uploaded trainings, never part of the problemset.
    pub fn is_gym(&self) -> bool {
        self.0 >= GYM_CONTEST_ID_THRESHOLD
    }
}

impl From<i64> for ContestId {
    fn from(raw: i64) -> Self {
        ContestId(raw)
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based rank of a problem inside its contest, derived from the leading
/// letter of its index ("A" -> 1, "c2" -> 3).
///
/// Returns `None` when the index does not start with an ASCII letter.
pub fn position_from_index(index: &str) -> Option<u32> {
    let first = index.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    Some(u32::from(first.to_ascii_uppercase()) - u32::from('A') + 1)
}
