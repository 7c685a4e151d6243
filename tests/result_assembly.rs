use problemset_core::catalog::{Contest, ContestCategory, ContestPhase, Problem};
use problemset_core::filtering::{filter_problems, ProblemFilter};
use problemset_core::spec::FilterSpec;

fn end_to_end_problems() -> Vec<Problem> {
    vec![
        Problem::new(1, "A", Some(800)),
        Problem::new(1, "B", Some(1900)),
        Problem::new(100_001, "A", Some(800)),
    ]
}

fn end_to_end_contests() -> Vec<Contest> {
    vec![Contest::new(1, "Div. 2 Round", ContestPhase::Finished, Some(1000))]
}

fn end_to_end_spec() -> FilterSpec {
    FilterSpec::new()
        .with_rating(Some(800), Some(1000))
        .with_category(ContestCategory::Div2)
        .with_positions(1, 1)
        .with_recent_contests(1)
        .with_max_results(10)
}

#[test]
fn end_to_end_scenario() {
    let result = ProblemFilter::default()
        .filter(&end_to_end_problems(), &end_to_end_contests(), &end_to_end_spec())
        .unwrap();

    assert_eq!(result.problems, vec![Problem::new(1, "A", Some(800))]);

    let meta = &result.filter;
    assert_eq!(meta.problems_considered, 3);
    assert_eq!(meta.excluded_by_gym, 1);
    assert_eq!(meta.excluded_by_rating, 1);
    assert_eq!(meta.excluded_by_recency, 0);
    assert_eq!(meta.recency_window, Some(1));
    assert_eq!(meta.problems_returned, 1);

    assert_eq!(
        result.links(),
        vec!["https://codeforces.com/problemset/problem/1/A".to_string()]
    );
}

#[test]
fn truncation_keeps_first_entries_in_catalog_order() {
    let problems: Vec<Problem> = ["A", "B", "C", "D", "E"]
        .iter()
        .enumerate()
        .map(|(i, index)| Problem::new(10 + i as i64, *index, Some(1000)))
        .collect();
    let spec = FilterSpec::new().with_max_results(2);

    let result = ProblemFilter::default().filter(&problems, &[], &spec).unwrap();

    assert_eq!(result.problems, problems[..2].to_vec());
    assert_eq!(result.filter.excluded_by_limit, 3);
}

#[test]
fn recency_narrowing_happens_before_truncation() {
    let contests = vec![
        Contest::new(1, "Round 1", ContestPhase::Finished, Some(100)),
        Contest::new(2, "Round 2", ContestPhase::Finished, Some(200)),
        Contest::new(3, "Round 3", ContestPhase::Finished, Some(300)),
    ];
    let problems = vec![
        Problem::new(1, "A", Some(800)),
        Problem::new(1, "B", Some(900)),
        Problem::new(2, "A", Some(800)),
        Problem::new(3, "A", Some(800)),
        Problem::new(3, "B", Some(900)),
    ];
    let spec = FilterSpec::new().with_recent_contests(2).with_max_results(2);

    let result = ProblemFilter::default().filter(&problems, &contests, &spec).unwrap();

    // Contest 1 is outside the window, so the first two survivors come from 2 and 3.
    assert_eq!(
        result.problems,
        vec![Problem::new(2, "A", Some(800)), Problem::new(3, "A", Some(800))]
    );
    assert_eq!(result.filter.excluded_by_recency, 2);
    assert_eq!(result.filter.excluded_by_limit, 1);
}

#[test]
fn recency_is_skipped_with_empty_contest_catalog() {
    let problems = end_to_end_problems();
    let spec = FilterSpec::new().with_recent_contests(1);

    let result = ProblemFilter::default().filter(&problems, &[], &spec).unwrap();

    assert_eq!(result.problems.len(), 2);
    assert_eq!(result.filter.recency_window, None);
}

#[test]
fn problems_of_unknown_contests_fall_outside_recency_window() {
    let contests = end_to_end_contests();
    let problems = vec![Problem::new(1, "A", None), Problem::new(7, "A", None)];
    let spec = FilterSpec::new().with_recent_contests(5);

    let result = filter_problems(&problems, &contests, &spec).unwrap();
    assert_eq!(result, vec![Problem::new(1, "A", None)]);
}

#[test]
fn empty_problem_catalog_gives_empty_result() {
    let result = ProblemFilter::default()
        .filter(&[], &end_to_end_contests(), &end_to_end_spec())
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.filter.problems_considered, 0);
}

#[test]
fn default_spec_only_drops_gym_problems() {
    let problems = vec![
        Problem::new(1, "A", None),
        Problem::new(100_000, "A", Some(800)),
        Problem::new(2, "K", Some(3500)),
    ];

    let result = filter_problems(&problems, &[], &FilterSpec::new()).unwrap();
    assert_eq!(result, vec![problems[0].clone(), problems[2].clone()]);
}

#[test]
fn passthrough_fields_survive_filtering() {
    let problems = vec![Problem::new(1, "A", Some(800))
        .with_field("name", "Watermelon")
        .with_field("tags", serde_json::json!(["brute force", "math"]))];

    let result = filter_problems(&problems, &[], &FilterSpec::new()).unwrap();
    assert_eq!(result[0].extra["name"], "Watermelon");
    assert_eq!(result[0].extra["tags"][1], "math");
}

#[test]
fn filter_instance_is_shareable_across_threads() {
    let filter = ProblemFilter::default();
    let problems = end_to_end_problems();
    let contests = end_to_end_contests();
    let spec = end_to_end_spec();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| filter.filter(&problems, &contests, &spec).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
    }
}
