use super::*;
use std::fs::File;
use std::io::BufReader;

#[test]
fn can_read_full_config() {
    let file = File::open("tests/data/config.full.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let heuristics = config.heuristics.clone().expect("no heuristics config");
    assert_eq!(heuristics.construction, Some(ConstructionKind::FarthestInsertion));
    assert_eq!(heuristics.improvements, Some(vec![ImprovementKind::TwoOpt, ImprovementKind::ThreeOpt]));
    assert_eq!(heuristics.lower_bound, Some(true));
    assert_eq!(heuristics.start_city, Some(1));
    assert_eq!(config.animation, Some(Settings { animated: false, step_time: 50 }));
    assert_eq!(config.max_time(), Some(300));
    assert!(!config.is_logging_enabled());
    assert_eq!(config.seed(), Some(42));
}

#[test]
fn can_read_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert!(config.heuristics.is_none());
    assert!(config.animation.is_none());
    assert_eq!(config.max_time(), None);
    assert!(!config.is_logging_enabled());
    assert_eq!(config.seed(), None);
}

#[test]
fn can_use_defaults_for_partial_animation_config() {
    let config = read_config(BufReader::new(r#"{ "animation": { "animated": true } }"#.as_bytes())).unwrap();

    assert_eq!(config.animation, Some(Settings { animated: true, step_time: 200 }));
}

#[test]
fn can_reject_unknown_heuristic() {
    let result = read_config(BufReader::new(r#"{ "heuristics": { "construction": "christofides" } }"#.as_bytes()));

    assert!(result.is_err());
}

#[test]
fn can_create_environment_with_seed_and_time_quota() {
    let config = read_config(BufReader::new(r#"{ "random": { "seed": 7 }, "termination": { "maxTime": 0 } }"#.as_bytes()))
        .unwrap();

    let first = create_environment_from_config(&config, None);
    let second = create_environment_from_config(&config, None);

    assert_eq!(first.random.uniform_int(0, 1_000_000), second.random.uniform_int(0, 1_000_000));
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(first.is_quota_reached());
}

#[test]
fn can_prefer_external_quota() {
    struct NeverReached;
    impl Quota for NeverReached {
        fn is_reached(&self) -> bool {
            false
        }
    }
    let config = read_config(BufReader::new(r#"{ "termination": { "maxTime": 0 } }"#.as_bytes())).unwrap();

    let environment = create_environment_from_config(&config, Some(Arc::new(NeverReached)));
    std::thread::sleep(std::time::Duration::from_millis(5));

    assert!(!environment.is_quota_reached());
}
