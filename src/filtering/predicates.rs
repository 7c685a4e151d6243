use crate::catalog::{Classifier, DivisionClassifier, Problem};
use crate::index::ContestIndex;
use crate::spec::FilterSpec;
use crate::types::{position_from_index, Check, FilterError, RecordKind};

/// Outcome of running the predicate checks on one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The first check that rejected the problem.
    Fail(Check),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// A required problem field was absent. The caller knows the record's
/// position in the catalog and turns this into a `FilterError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
    pub check: Check,
}

impl MissingField {
    pub fn at(self, position: usize) -> FilterError {
        FilterError::MalformedRecord {
            kind: RecordKind::Problem,
            position,
            field: self.field,
            check: self.check,
        }
    }
}

/// Run gym, rating, category and position checks in that order, stopping at
/// the first failure. Pure: no state is kept between problems.
///
/// `contests` is `None` when no contest catalog was supplied; the category
/// check is then skipped. `spec` must already have passed
/// [`FilterSpec::validate`]; an unvalidated spec gives meaningless verdicts.
pub fn evaluate<C: Classifier + ?Sized>(
    problem: &Problem,
    spec: &FilterSpec,
    contests: Option<&ContestIndex<'_>>,
    classifier: &C,
) -> Result<Verdict, MissingField> {
    // 1. Gym exclusion
    let contest_id = problem.contest_id.ok_or(MissingField {
        field: "contestId",
        check: Check::Gym,
    })?;
    if contest_id.is_gym() {
        return Ok(Verdict::Fail(Check::Gym));
    }

    // 2. Rating
    if !rating_admits(spec, problem.rating) {
        return Ok(Verdict::Fail(Check::Rating));
    }

    // 3. Category. A contest missing from the catalog cannot be classified
    // and does not exclude the problem.
    if let (Some(wanted), Some(index)) = (spec.contest_category, contests) {
        if let Some(contest) = index.get(contest_id) {
            if classifier.classify(&contest.name) != wanted {
                return Ok(Verdict::Fail(Check::Category));
            }
        }
    }

    // 4. Position
    if let Some((start, end)) = spec.position_bounds() {
        let index = problem.index.as_deref().ok_or(MissingField {
            field: "index",
            check: Check::Position,
        })?;
        if let Some(position) = position_from_index(index) {
            if position < start || position > end {
                return Ok(Verdict::Fail(Check::Position));
            }
        }
    }

    Ok(Verdict::Pass)
}

/// Without any bound every problem passes, rated or not. With a bound an
/// unrated problem never passes.
pub fn rating_admits(spec: &FilterSpec, rating: Option<u32>) -> bool {
    if !spec.has_rating_bounds() {
        return true;
    }
    let Some(rating) = rating else {
        return false;
    };

    spec.rating_lower.map_or(true, |lower| rating >= lower)
        && spec.rating_upper.map_or(true, |upper| rating <= upper)
}

/// Single-problem form of [`evaluate`] using the name-based classifier.
/// The spec is validated first. A malformed problem is reported at position 0.
pub fn passes(
    problem: &Problem,
    spec: &FilterSpec,
    contests: Option<&ContestIndex<'_>>,
) -> Result<bool, FilterError> {
    spec.validate()?;
    evaluate(problem, spec, contests, &DivisionClassifier)
        .map(|verdict| verdict.is_pass())
        .map_err(|missing| missing.at(0))
}
