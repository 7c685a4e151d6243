pub mod limiting;
pub mod predicates;

use crate::catalog::{Classifier, Contest, DivisionClassifier, Problem};
use crate::index::ContestIndex;
use crate::spec::FilterSpec;
use crate::types::{Check, FilterError, FilterMetadata, FilterResult};
pub use limiting::{apply_limit, LimitResult};
pub use predicates::{evaluate, passes, rating_admits, MissingField, Verdict};

/// One-shot filtering engine. Holds no per-pass state, so a single instance
/// can serve any number of passes, from any number of threads.
pub struct ProblemFilter<C> {
	classifier: C,
}

impl Default for ProblemFilter<DivisionClassifier> {
	fn default() -> Self {
		Self {
			classifier: DivisionClassifier,
		}
	}
}

impl<C> ProblemFilter<C>
where
	C: Classifier,
{
	pub fn new(classifier: C) -> Self {
		Self { classifier }
	}

	pub fn filter(
		&self,
		problems: &[Problem],
		contests: &[Contest],
		spec: &FilterSpec,
	) -> Result<FilterResult, FilterError> {
		// 0. Reject a bad spec before touching any record
		spec.validate()?;

		// 1. Contest index, only when a contest-based check is requested
		let index = if contests.is_empty() {
			if spec.contest_category.is_some() || spec.recent_contest_count.is_some() {
				log::warn!("Contest catalog is empty; category and recency filters are skipped");
			}
			None
		} else if spec.contest_category.is_some() {
			Some(ContestIndex::build(contests, Check::Category)?)
		} else if spec.recent_contest_count.is_some() {
			Some(ContestIndex::build(contests, Check::Recency)?)
		} else {
			None
		};

		let mut metadata = FilterMetadata {
			problems_considered: problems.len(),
			..FilterMetadata::default()
		};

		// 2. Predicate phase, catalog order preserved
		let mut candidates: Vec<&Problem> = Vec::new();
		for (position, problem) in problems.iter().enumerate() {
			let verdict = evaluate(problem, spec, index.as_ref(), &self.classifier)
				.map_err(|missing| missing.at(position))?;
			match verdict {
				Verdict::Pass => candidates.push(problem),
				Verdict::Fail(check) => metadata.record_exclusion(check),
			}
		}

		log::debug!(
			"{} of {} problems passed predicates (gym {}, rating {}, category {}, position {})",
			candidates.len(),
			problems.len(),
			metadata.excluded_by_gym,
			metadata.excluded_by_rating,
			metadata.excluded_by_category,
			metadata.excluded_by_position,
		);

		// 3. Recency phase
		if let (Some(count), Some(index)) = (spec.recent_contest_count, index.as_ref()) {
			let window = index.recency_window(count);
			metadata.recency_window = Some(window.len());

			candidates.retain(|problem| {
				let keep = problem.contest_id.map_or(false, |id| window.contains(&id));
				if !keep {
					metadata.record_exclusion(Check::Recency);
				}
				keep
			});
		}

		// 4. Truncation, always last
		let LimitResult {
			selected,
			excluded_by_limit,
		} = apply_limit(candidates, spec.max_results);

		metadata.excluded_by_limit = excluded_by_limit;
		metadata.problems_returned = selected.len();

		debug_assert_eq!(
			metadata.problems_considered,
			metadata.problems_returned
				+ metadata.excluded_by_gym
				+ metadata.excluded_by_rating
				+ metadata.excluded_by_category
				+ metadata.excluded_by_position
				+ metadata.excluded_by_recency
				+ metadata.excluded_by_limit
		);

		Ok(FilterResult {
			problems: selected.into_iter().cloned().collect(),
			filter: metadata,
		})
	}
}

/// Filter with the default classifier and return only the problems.
pub fn filter_problems(
	problems: &[Problem],
	contests: &[Contest],
	spec: &FilterSpec,
) -> Result<Vec<Problem>, FilterError> {
	ProblemFilter::default()
		.filter(problems, contests, spec)
		.map(|result| result.problems)
}
