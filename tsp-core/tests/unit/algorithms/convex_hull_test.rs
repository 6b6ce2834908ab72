use super::*;
use crate::helpers::models::create_instance;

fn build_hull(coordinates: &[(f64, f64)]) -> (ConvexHullList, Vec<(usize, usize)>) {
    let state = create_instance(coordinates);
    let mut hull = ConvexHullList::new(state.city_count());
    let mut edges = Vec::new();

    assert!(hull.build_hull(state.cities(), &mut |from, to| {
        edges.push((from, to));
        true
    }));

    (hull, edges)
}

#[test]
fn can_build_hull_counterclockwise() {
    let (hull, edges) = build_hull(&[(1., 1.), (0., 2.), (2., 0.), (2., 2.), (0., 0.5), (1., 0.5)]);

    assert_eq!(hull.tour_nodes().collect::<Vec<_>>(), vec![2, 3, 1, 4]);
    assert_eq!(edges, vec![(2, 3), (3, 1), (1, 4), (4, 2)]);
    assert_eq!(hull.free_len(), 2);
    assert_eq!(hull.free_nodes().collect::<Vec<_>>(), vec![0, 5]);
}

#[test]
fn can_skip_collinear_points_on_hull_edge() {
    let (hull, _) = build_hull(&[(0., 0.), (1., 0.), (2., 0.), (1., 1.)]);

    assert_eq!(hull.tour_nodes().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(hull.free_nodes().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn can_stop_building_hull() {
    let state = create_instance(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
    let mut hull = ConvexHullList::new(4);

    assert!(!hull.build_hull(state.cities(), &mut |_, _| false));
    assert_eq!(hull.tour_len(), 2);
}

#[test]
fn can_insert_free_nodes() {
    let (mut hull, _) = build_hull(&[(0., 0.), (2., 0.), (1., 1.), (2., 2.), (0., 2.)]);
    assert_eq!(hull.tour_nodes().collect::<Vec<_>>(), vec![0, 1, 3, 4]);

    let city = hull.nth_free(0).unwrap();
    hull.insert_after(3, city);

    assert_eq!(hull.tour_nodes().collect::<Vec<_>>(), vec![0, 1, 3, 2, 4]);
    assert_eq!(hull.next(2), 4);
    assert_eq!(hull.free_len(), 0);
    assert_eq!(hull.nth_free(0), None);
}
