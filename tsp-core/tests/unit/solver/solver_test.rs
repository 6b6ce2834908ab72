use super::*;
use crate::construction::ConstructionKind;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::helpers::utils::create_test_environment;
use crate::models::Point;
use std::sync::Mutex;

#[test]
fn can_log_start_and_end_of_run() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger_messages = messages.clone();
    let environment = Environment {
        logger: Arc::new(move |msg: &str| logger_messages.lock().unwrap().push(msg.to_string())),
        ..create_test_environment()
    };
    let solver = Solver::new(Arc::new(environment), Settings::default(), Arc::new(NoAnimation));
    let mut state = create_square_instance();

    solver.run(&mut state, HeuristicKind::Construction(ConstructionKind::NearestNeighbor)).unwrap();
    solver.run(&mut state, HeuristicKind::Improvement(ImprovementKind::HeldKarp)).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], "nearest neighbor started on 4 cities");
    assert!(messages[1].starts_with("nearest neighbor completed in "));
    assert!(messages[1].ends_with("tour length: 4.000"));
    assert!(messages[3].ends_with("lower bound: 4.000"));
}

#[test]
fn can_run_edits_as_jobs() {
    let solver = create_test_solver();
    let mut state = create_square_instance();
    solver.run(&mut state, HeuristicKind::Construction(ConstructionKind::NearestNeighbor)).unwrap();

    solver.run(&mut state, HeuristicKind::Edit(EditKind::AddCity(Point::new(0.5, 0.5)))).unwrap();
    solver.run(&mut state, HeuristicKind::Edit(EditKind::MoveCity(4, Point::new(0.5, -1.)))).unwrap();
    let outcome = solver.run(&mut state, HeuristicKind::Edit(EditKind::DeleteCity(1))).unwrap();
    assert_valid_tour(&state);

    let RunOutcome::Deleted(removed) = outcome else { panic!("unexpected outcome: {outcome:?}") };
    assert_eq!(removed.location, Point::new(0., 1.));
    solver.run(&mut state, HeuristicKind::Edit(EditKind::RestoreCity(removed))).unwrap();

    assert_eq!(state.city_count(), 5);
    assert_eq!(state.city(1).location, Point::new(0., 1.));
    assert_valid_tour(&state);
}

#[test]
fn can_generate_instance_as_job() {
    let (solver, animation) = create_animated_solver();
    let mut state = InstanceState::default();

    solver.run(&mut state, HeuristicKind::Edit(EditKind::Generate { width: 100, height: 50, count: 300 })).unwrap();

    assert_eq!(state.city_count(), 300);
    assert!(animation.events().contains(&AnimationEvent::Progress(100)));
}

#[test]
fn can_return_edit_error() {
    let solver = create_test_solver();
    let mut state = create_square_instance();

    let result = solver.run(&mut state, HeuristicKind::Edit(EditKind::DeleteCity(10)));

    assert!(result.is_err());
    assert_eq!(state.city_count(), 4);
}

#[test]
fn can_run_heuristic_on_worker_thread() {
    let solver = create_test_solver();
    let state = create_random_instance(200, 1);

    let handle = solver.start(state, HeuristicKind::Construction(ConstructionKind::Greedy));
    let (state, outcome) = handle.join().unwrap();

    assert_eq!(outcome.unwrap(), RunOutcome::Completed);
    assert_valid_tour(&state);
}

#[test]
fn can_stop_paused_worker() {
    let (solver, _) = create_animated_solver();
    let mut state = create_random_instance(100, 2);
    set_identity_tour(&mut state);
    let original = state.snapshot_tour();

    let control = Arc::new(RunControl::default());
    control.request_pause(true);
    let handle = solver.start_with_control(state, HeuristicKind::Construction(ConstructionKind::NearestNeighbor), control);

    std::thread::sleep(std::time::Duration::from_millis(50));
    assert!(handle.is_running());
    assert!(handle.control().is_paused());

    handle.request_stop();
    let (state, outcome) = handle.join().unwrap();

    assert_eq!(outcome.unwrap(), RunOutcome::Cancelled);
    assert_eq!(state.snapshot_tour(), original);
}

#[test]
fn can_resume_paused_worker() {
    let (solver, animation) = create_animated_solver();
    let state = create_random_instance(50, 3);
    let control = Arc::new(RunControl::default());
    control.request_pause(true);

    let handle = solver.start_with_control(state, HeuristicKind::Construction(ConstructionKind::MstPreorder), control);
    std::thread::sleep(std::time::Duration::from_millis(20));
    assert!(handle.is_running());
    assert!(!animation.events().iter().any(|event| matches!(event, AnimationEvent::EdgeAdded(..))));

    handle.request_pause(false);
    let (state, outcome) = handle.join().unwrap();

    assert_eq!(outcome.unwrap(), RunOutcome::Completed);
    assert_valid_tour(&state);
    assert_eq!(animation.events().first(), Some(&AnimationEvent::Status("mst preorder".to_string())));
}
