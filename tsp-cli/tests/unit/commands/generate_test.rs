use super::*;
use std::fs::File;
use std::io::BufReader;
use tsp_cli::extensions::generate::read_points;

#[test]
fn can_generate_instance_into_file() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let path = tmpfile.path().to_str().unwrap();
    let args = vec!["generate", "--cities", "25", "--width", "50", "--height", "40", "--seed", "3", "-o", path];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    run_generate(&matches, get_write_buffer).unwrap();

    let points = read_points(BufReader::new(File::open(path).unwrap())).unwrap();
    assert_eq!(points.len(), 25);
    assert!(points.iter().all(|point| point.x < 50. && point.y < 40.));
}

#[test]
fn can_return_error_for_invalid_cities_value() {
    let args = vec!["generate", "--cities", "many", "--width", "50", "--height", "40"];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    let result = run_generate(&matches, get_write_buffer);

    assert!(result.is_err_and(|err| err.contains("cities")));
}

#[test]
fn can_require_area_size() {
    let result = get_generate_app().try_get_matches_from(["generate", "--cities", "10"]);

    assert!(result.is_err());
}
