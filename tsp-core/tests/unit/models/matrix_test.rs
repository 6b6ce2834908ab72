use super::*;

fn create_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![vec![0., 1., 2.], vec![1., 0., 3.], vec![2., 3., 0.]])
}

#[test]
fn can_set_distance_symmetrically() {
    let mut matrix = create_matrix();

    matrix.set(0, 2, 7.);

    assert_eq!(matrix.distance(0, 2), 7.);
    assert_eq!(matrix.distance(2, 0), 7.);
}

#[test]
fn can_insert_city() {
    let mut matrix = create_matrix();

    matrix.insert(1);

    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.row(1), &[0., 0., 0., 0.]);
    assert_eq!(matrix.row(0), &[0., 0., 1., 2.]);
    assert_eq!(matrix.row(3), &[2., 0., 3., 0.]);
}

#[test]
fn can_remove_city() {
    let mut matrix = create_matrix();

    let removed = matrix.remove(1);

    assert_eq!(removed, vec![1., 3.]);
    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix.row(0), &[0., 2.]);
    assert_eq!(matrix.row(1), &[2., 0.]);
}
