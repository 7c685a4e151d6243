use std::fmt;

use serde::{Deserialize, Serialize};

/// Category tag derived from a contest's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestCategory {
    Educational,
    Div2,
    Div1And2,
    Div3,
    Div4,
    Other,
}

impl ContestCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestCategory::Educational => "educational",
            ContestCategory::Div2 => "div2",
            ContestCategory::Div1And2 => "div1_and2",
            ContestCategory::Div3 => "div3",
            ContestCategory::Div4 => "div4",
            ContestCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContestCategory::Educational => "Educational",
            ContestCategory::Div2 => "Normal Div 2",
            ContestCategory::Div1And2 => "Div 1+2",
            ContestCategory::Div3 => "Div 3",
            ContestCategory::Div4 => "Div 4",
            ContestCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ContestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Classifier {
    fn classify(&self, contest_name: &str) -> ContestCategory;
}

/// Name-based classifier matching the archive's round naming scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivisionClassifier;

impl Classifier for DivisionClassifier {
    fn classify(&self, contest_name: &str) -> ContestCategory {
        classify(contest_name)
    }
}

/// Case-insensitive, first match wins. "div. 1" and "div. 2" may co-occur,
/// so the combined check must run before the single-division ones.
pub fn classify(contest_name: &str) -> ContestCategory {
    let name = contest_name.to_lowercase();

    if name.contains("educational") {
        ContestCategory::Educational
    } else if name.contains("div. 1") && name.contains("div. 2") {
        ContestCategory::Div1And2
    } else if name.contains("div. 2") {
        ContestCategory::Div2
    } else if name.contains("div. 3") {
        ContestCategory::Div3
    } else if name.contains("div. 4") {
        ContestCategory::Div4
    } else {
        ContestCategory::Other
    }
}
