use problemset_core::catalog::{Contest, ContestCategory, ContestPhase, Problem};
use problemset_core::filtering::ProblemFilter;
use problemset_core::spec::{FilterSpec, SpecError};
use problemset_core::types::{Check, FilterError, RecordKind};

fn problems_from_json(json: &str) -> Vec<Problem> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn problem_without_contest_id_is_reported_with_position() {
    let problems = problems_from_json(
        r#"[
            {"contestId": 1, "index": "A", "rating": 800},
            {"index": "B", "rating": 900}
        ]"#,
    );

    let err = ProblemFilter::default()
        .filter(&problems, &[], &FilterSpec::new())
        .unwrap_err();

    assert!(matches!(
        err,
        FilterError::MalformedRecord {
            kind: RecordKind::Problem,
            position: 1,
            field: "contestId",
            check: Check::Gym,
        }
    ));
    assert_eq!(
        err.to_string(),
        "Malformed problem record at position 1: missing `contestId` (needed by gym exclusion)"
    );
}

#[test]
fn missing_index_is_an_error_only_with_position_filter() {
    let problems = problems_from_json(r#"[{"contestId": 1, "rating": 800}]"#);
    let filter = ProblemFilter::default();

    let result = filter.filter(&problems, &[], &FilterSpec::new()).unwrap();
    assert_eq!(result.problems.len(), 1);
    assert!(result.links().is_empty());

    let err = filter
        .filter(&problems, &[], &FilterSpec::new().with_positions(1, 3))
        .unwrap_err();
    assert!(matches!(
        err,
        FilterError::MalformedRecord {
            field: "index",
            check: Check::Position,
            ..
        }
    ));
}

#[test]
fn missing_rating_is_not_malformed() {
    let problems = problems_from_json(r#"[{"contestId": 1, "index": "A"}]"#);
    let spec = FilterSpec::new().with_rating(Some(800), Some(3500));

    let result = ProblemFilter::default().filter(&problems, &[], &spec).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.filter.excluded_by_rating, 1);
}

#[test]
fn malformed_contest_surfaces_only_when_contests_are_used() {
    let mut contests = vec![Contest::new(1, "Round (Div. 2)", ContestPhase::Finished, Some(1))];
    contests[0].phase = None;
    let problems = vec![Problem::new(1, "A", Some(800))];
    let filter = ProblemFilter::default();

    assert!(filter.filter(&problems, &contests, &FilterSpec::new()).is_ok());

    let err = filter
        .filter(&problems, &contests, &FilterSpec::new().with_category(ContestCategory::Div2))
        .unwrap_err();
    assert!(matches!(
        err,
        FilterError::MalformedRecord {
            kind: RecordKind::Contest,
            position: 0,
            field: "phase",
            check: Check::Category,
        }
    ));
}

#[test]
fn invalid_spec_fails_before_records_are_examined() {
    // The malformed record would otherwise be reported.
    let problems = problems_from_json(r#"[{"index": "A"}]"#);
    let spec = FilterSpec::new().with_rating(Some(2000), Some(1000));

    let err = ProblemFilter::default().filter(&problems, &[], &spec).unwrap_err();
    assert!(matches!(
        err,
        FilterError::InvalidSpec(SpecError::RatingBoundsInverted {
            lower: 2000,
            upper: 1000
        })
    ));
}
