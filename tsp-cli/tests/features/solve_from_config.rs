use crate::extensions::generate::{generate_points, read_points, write_points};
use crate::extensions::solve::config::{create_environment_from_config, read_config};
use crate::extensions::solve::{LoggingAnimation, SolveRequest, solve};
use crate::helpers::*;
use std::fs::File;
use std::io::BufReader;
use std::sync::{Arc, Mutex};
use tsp_core::prelude::*;

#[test]
fn can_solve_generated_instance_using_full_config() {
    let config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();
    let heuristics = config.heuristics.clone().unwrap();
    let environment = Arc::new(create_environment_from_config(&config, None));
    let solver = Solver::new(environment.clone(), config.animation.clone().unwrap_or_default(), Arc::new(NoAnimation));

    let mut buffer = Vec::new();
    let points = generate_points(500, 500, 120, environment.random.as_ref()).unwrap();
    write_points(&mut buffer, points.as_slice()).unwrap();
    let request = SolveRequest {
        points: read_points(buffer.as_slice()).unwrap(),
        construction: heuristics.construction.unwrap(),
        improvements: heuristics.improvements.unwrap(),
        lower_bound: heuristics.lower_bound.unwrap(),
        start_city: heuristics.start_city.unwrap(),
    };

    let summary = solve(&request, &solver).unwrap();

    assert_eq!(summary.cities, 120);
    assert_eq!(summary.steps.len(), 4);
    assert!(summary.steps.windows(2).take(2).all(|pair| pair[1].tour_length <= pair[0].tour_length + 1E-9));
    let lower_bound = summary.lower_bound.unwrap();
    assert!(lower_bound > 0. && lower_bound <= summary.tour_length + 1E-6);
    assert!(summary.gap.is_some_and(|gap| gap >= -1E-6));

    let mut visited = summary.tour.clone();
    visited.sort_unstable();
    assert_eq!(visited, (0..120).collect::<Vec<_>>());
}

#[test]
fn can_report_status_and_progress_through_logger() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let environment = Environment { logger: logger.clone(), ..Environment::default() };
    let solver = Solver::new(Arc::new(environment), Settings::default(), Arc::new(LoggingAnimation::new(logger)));
    let request = SolveRequest {
        points: create_square_points(),
        construction: ConstructionKind::Greedy,
        improvements: vec![],
        lower_bound: true,
        start_city: 0,
    };

    solve(&request, &solver).unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.contains(&"status: greedy".to_string()));
    assert!(messages.contains(&"status: held-karp lower bound".to_string()));
    assert!(messages.contains(&"progress: 100%".to_string()));
    assert!(messages.iter().any(|msg| msg.starts_with("greedy completed in ")));
}
