// Read-only view over the contest catalog:
// built once per filtering pass
// borrows, never copies, contest records

use std::collections::HashMap;

use crate::catalog::{Contest, ContestId};
use crate::types::{Check, FilterError, RecordKind};

#[derive(Debug)]
pub struct ContestIndex<'a> {
    contests: &'a [Contest],
    by_id: HashMap<ContestId, &'a Contest>,
}

impl<'a> ContestIndex<'a> {
    /// Index every contest by id. `purpose` names the check that needs the
    /// catalog and is reported if a record turns out to be malformed.
    ///
    /// Duplicate ids resolve to the last record with that id.
    pub fn build(contests: &'a [Contest], purpose: Check) -> Result<Self, FilterError> {
        let mut by_id = HashMap::with_capacity(contests.len());

        for (position, contest) in contests.iter().enumerate() {
            let id = contest.id.ok_or(FilterError::MalformedRecord {
                kind: RecordKind::Contest,
                position,
                field: "id",
                check: purpose,
            })?;
            if contest.phase.is_none() {
                return Err(FilterError::MalformedRecord {
                    kind: RecordKind::Contest,
                    position,
                    field: "phase",
                    check: purpose,
                });
            }
            by_id.insert(id, contest);
        }

        Ok(Self { contests, by_id })
    }

    pub fn get(&self, id: ContestId) -> Option<&'a Contest> {
        self.by_id.get(&id).copied()
    }

    pub fn contests(&self) -> &'a [Contest] {
        self.contests
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}
