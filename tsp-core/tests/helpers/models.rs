use crate::models::{EdgeWeightKind, InstanceState, Point};
use crate::utils::DefaultRandom;

/// Creates an instance with cities at given coordinates.
pub fn create_instance(coordinates: &[(f64, f64)]) -> InstanceState {
    let points = coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect::<Vec<_>>();
    let mut state = InstanceState::default();
    state.set_instance(&points, None, EdgeWeightKind::Euc2D).expect("cannot create instance");

    state
}

/// Creates the unit square instance: (0,0), (0,1), (1,1), (1,0).
pub fn create_square_instance() -> InstanceState {
    create_instance(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)])
}

/// Creates an instance with cities on a `columns x rows` grid with unit spacing.
pub fn create_grid_instance(columns: usize, rows: usize) -> InstanceState {
    let coordinates =
        (0..rows).flat_map(|y| (0..columns).map(move |x| (x as f64, y as f64))).collect::<Vec<_>>();

    create_instance(&coordinates)
}

/// Creates a random instance which is the same for the same seed.
pub fn create_random_instance(count: usize, seed: u64) -> InstanceState {
    let mut state = InstanceState::default();
    state.generate(1000, 1000, count, &DefaultRandom::new_repeatable(seed), &mut |_| {}).expect("cannot generate");

    state
}

/// Sets the tour visiting cities in index order.
pub fn set_identity_tour(state: &mut InstanceState) {
    let order = (0..state.city_count()).collect::<Vec<_>>();
    state.set_tour(&order, 0.).expect("cannot set tour");
    let length = state.recompute_tour_length();
    state.set_tour(&order, length).expect("cannot set tour");
}

/// Asserts that the tour visits every city exactly once and the tour index mapping is consistent.
pub fn assert_valid_tour(state: &InstanceState) {
    assert_eq!(state.tour_size(), state.city_count(), "tour is not complete");

    let mut visited = vec![false; state.city_count()];
    state.tour().iter().enumerate().for_each(|(position, &city)| {
        assert!(!visited[city], "city {city} is visited twice");
        visited[city] = true;
        assert_eq!(state.city(city).tour_index, Some(position));
    });

    assert!(
        (state.tour_length() - state.recompute_tour_length()).abs() < 1E-6,
        "tour length {} differs from recomputed {}",
        state.tour_length(),
        state.recompute_tour_length()
    );
}

/// Asserts that the neighbour list of every city holds exactly its nearest cities in ascending order.
pub fn assert_valid_neighbours(state: &InstanceState) {
    (0..state.city_count()).for_each(|city| {
        let neighbours = state.neighbours(city).as_slice();
        let mut expected = (0..state.city_count())
            .filter(|&other| other != city)
            .map(|other| state.distance(city, other))
            .collect::<Vec<_>>();
        expected.sort_by(|a, b| a.total_cmp(b));
        expected.truncate(crate::models::NEIGHBOURS_LIST_SIZE);

        let actual = neighbours.iter().map(|n| n.distance).collect::<Vec<_>>();
        assert_eq!(actual.len(), expected.len(), "neighbours size of city {city}");
        actual.iter().zip(expected.iter()).for_each(|(a, e)| assert!((a - e).abs() < 1E-9, "city {city}: {a} != {e}"));
        neighbours.iter().for_each(|n| {
            assert_ne!(n.city, city);
            assert!((state.distance(city, n.city) - n.distance).abs() < 1E-9, "stale neighbour of city {city}");
        });
    });
}
