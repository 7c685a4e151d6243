use std::cmp::Reverse;
use std::collections::HashSet;

use crate::catalog::{Contest, ContestId};
use crate::index::lookup::ContestIndex;

impl<'a> ContestIndex<'a> {
    /// Ids of the `count` most recent finished contests.
    ///
    /// Contests are ordered by start time, newest first; equal start times keep
    /// catalog order. Unfinished contests are skipped without using up the
    /// count. A catalog with fewer finished contests yields a smaller window.
    pub fn recency_window(&self, count: usize) -> HashSet<ContestId> {
        let mut window = HashSet::with_capacity(count.min(self.len()));
        if count == 0 {
            return window;
        }

        // sort_by_key is stable
        let mut ordered: Vec<&Contest> = self.contests().iter().collect();
        ordered.sort_by_key(|contest| Reverse(contest.start_seconds()));

        // Every finished record counts, even one repeating an admitted id.
        let mut admitted = 0;
        let mut oldest: Option<&Contest> = None;
        for contest in ordered.into_iter().filter(|c| c.is_finished()) {
            if let Some(id) = contest.id {
                window.insert(id);
                oldest = Some(contest);
            }
            admitted += 1;
            if admitted >= count {
                break;
            }
        }

        if let Some(start) = oldest.and_then(Contest::start_time) {
            log::debug!(
                "Recency window holds {} contests, oldest started {}",
                window.len(),
                start.format("%Y-%m-%d %H:%M UTC")
            );
        }

        window
    }
}
