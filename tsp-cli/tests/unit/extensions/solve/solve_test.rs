use super::*;
use crate::helpers::*;
use std::sync::Arc;

fn create_request(points: Vec<Point>) -> SolveRequest {
    SolveRequest {
        points,
        construction: ConstructionKind::NearestNeighbor,
        improvements: vec![ImprovementKind::TwoOpt],
        lower_bound: true,
        start_city: 0,
    }
}

#[test]
fn can_solve_square() {
    let summary = solve(&create_request(create_square_points()), &create_test_solver()).unwrap();

    assert_eq!(summary.cities, 4);
    assert!((summary.tour_length - 4.).abs() < 1E-9);
    assert_eq!(summary.tour, vec![0, 1, 2, 3]);
    assert_eq!(
        summary.steps.iter().map(|step| step.heuristic.as_str()).collect::<Vec<_>>(),
        vec!["nearest neighbor", "2-opt", "held-karp lower bound"]
    );
    assert!(summary.steps.iter().all(|step| step.outcome == "completed"));
    let lower_bound = summary.lower_bound.expect("no lower bound");
    assert!((lower_bound - 4.).abs() < 1E-6);
    assert!(summary.gap.is_some_and(|gap| gap.abs() < 1E-3));
}

#[test]
fn can_skip_lower_bound() {
    let request = SolveRequest { lower_bound: false, improvements: vec![], ..create_request(create_square_points()) };

    let summary = solve(&request, &create_test_solver()).unwrap();

    assert_eq!(summary.steps.len(), 1);
    assert_eq!(summary.lower_bound, None);
    assert_eq!(summary.gap, None);
}

#[test]
fn can_use_start_city() {
    let request = SolveRequest { start_city: 2, improvements: vec![], ..create_request(create_square_points()) };

    let summary = solve(&request, &create_test_solver()).unwrap();

    assert_eq!(summary.tour[0], 2);
}

#[test]
fn can_return_error_for_invalid_start_city() {
    let request = SolveRequest { start_city: 10, ..create_request(create_square_points()) };

    let result = solve(&request, &create_test_solver());

    assert!(result.is_err());
}

#[test]
fn can_stop_pipeline_when_quota_is_reached() {
    struct ReachedQuota;
    impl Quota for ReachedQuota {
        fn is_reached(&self) -> bool {
            true
        }
    }
    let environment = Environment {
        quota: Some(Arc::new(ReachedQuota)),
        logger: Arc::new(|_: &str| {}),
        ..Environment::default()
    };
    let solver = Solver::new(Arc::new(environment), Settings::default(), Arc::new(NoAnimation));
    let points = (0..20).map(|idx| Point::new((idx * 7 % 13) as f64, (idx * 5 % 11) as f64)).collect();

    let summary = solve(&create_request(points), &solver).unwrap();

    assert_eq!(summary.steps.len(), 1);
    assert_eq!(summary.steps[0].outcome, "cancelled");
    assert!(summary.tour.is_empty());
}

#[test]
fn can_write_summary_as_json() {
    let summary = solve(&create_request(create_square_points()), &create_test_solver()).unwrap();
    let mut buffer = Vec::new();

    write_summary(&mut buffer, &summary).unwrap();

    let value: serde_json::Value = serde_json::from_slice(buffer.as_slice()).unwrap();
    assert_eq!(value["cities"], 4);
    assert_eq!(value["tour"].as_array().map(|tour| tour.len()), Some(4));
    assert_eq!(value["steps"][0]["heuristic"], "nearest neighbor");
    assert!(value["lowerBound"].is_number());
    assert!(value["steps"][1]["elapsedMillis"].is_number());
}

#[test]
fn can_log_progress_by_deciles() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let animation = LoggingAnimation::new({
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    });

    animation.status("held-karp lower bound");
    (0..=100).for_each(|percent| animation.progress(percent));
    animation.status("2-opt");
    animation.progress(0);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1 + 11 + 1 + 1);
    assert_eq!(messages[0], "status: held-karp lower bound");
    assert_eq!(messages[1], "progress: 0%");
    assert_eq!(messages[2], "progress: 10%");
    assert_eq!(messages[11], "progress: 100%");
    assert_eq!(messages[13], "progress: 0%");
}
