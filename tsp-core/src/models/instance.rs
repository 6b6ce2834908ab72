#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use crate::models::{City, DistanceMatrix, NeighbourList, Point};
use crate::utils::{GenericError, GenericResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Max amount of cities supported by the engine.
pub const CITIES_CAPACITY: usize = 15_000;

/// Specifies how distances between cities are defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeWeightKind {
    /// Distances are given explicitly by a matrix.
    Explicit,
    /// Distances are euclidean distances between city coordinates.
    Euc2D,
}

/// An axis aligned rectangle which contains all cities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Bottom left corner.
    pub min: Point,
    /// Top right corner.
    pub max: Point,
}

/// A known optimal tour of the instance.
#[derive(Clone, Debug)]
pub struct OptimalTour {
    order: Vec<usize>,
    length: f64,
}

impl OptimalTour {
    /// Returns city indices in visiting order.
    pub fn order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Returns the length of the tour.
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// A copy of the tour which can be restored later.
#[derive(Clone, Debug, PartialEq)]
pub struct TourSnapshot {
    /// City indices in visiting order.
    pub order: Vec<usize>,
    /// Total tour length.
    pub length: f64,
}

/// Keeps the whole mutable model of the problem: cities, distances, current tour, optimal tour
/// (if known) and the last computed lower bound.
///
/// The state is shared by all heuristics and edits: it is passed explicitly to every run and it
/// is expected that only one run modifies it at a time.
#[derive(Clone, Debug, Default)]
pub struct InstanceState {
    pub(crate) cities: Vec<City>,
    pub(crate) matrix: DistanceMatrix,
    pub(crate) tour: Vec<usize>,
    pub(crate) tour_length: f64,
    pub(crate) optimal: Option<OptimalTour>,
    pub(crate) lower_bound: f64,
    pub(crate) start_city: usize,
}

impl InstanceState {
    /// Replaces the current instance with given cities. For `Explicit` kind the distance matrix
    /// must be provided, for `Euc2D` it is computed from coordinates.
    pub fn set_instance(
        &mut self,
        points: &[Point],
        matrix: Option<Vec<Vec<f64>>>,
        kind: EdgeWeightKind,
    ) -> GenericResult<()> {
        if points.len() > CITIES_CAPACITY {
            return Err(format!("instance size {} exceeds capacity {CITIES_CAPACITY}", points.len()).into());
        }

        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err("instance contains non finite coordinates".into());
        }

        let matrix = match (kind, matrix) {
            (EdgeWeightKind::Explicit, Some(rows)) => {
                if rows.len() != points.len() || rows.iter().any(|row| row.len() != points.len()) {
                    return Err(format!("explicit matrix must have {0}x{0} size", points.len()).into());
                }
                DistanceMatrix::from_rows(rows)
            }
            (EdgeWeightKind::Explicit, None) => return Err("explicit instance requires distance matrix".into()),
            (EdgeWeightKind::Euc2D, _) => DistanceMatrix::from_rows(
                points.par_iter().map(|from| points.iter().map(|to| from.distance_to(to)).collect()).collect(),
            ),
        };

        self.clear();
        self.cities = points.iter().enumerate().map(|(num, &location)| City::new(location, num)).collect();
        self.matrix = matrix;

        let matrix = &self.matrix;
        self.cities.par_iter_mut().enumerate().for_each(|(idx, city)| fill_neighbours(&mut city.neighbours, matrix, idx));

        Ok(())
    }

    /// Removes all cities and the tour.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.matrix.clear();
        self.optimal = None;
        self.lower_bound = 0.;
        self.start_city = 0;
        self.clear_tour();
    }

    /// Returns amount of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns city at given index.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Returns all cities in insertion order.
    pub fn cities(&self) -> &[City] {
        self.cities.as_slice()
    }

    /// Returns distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Returns distance between two cities.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.matrix.distance(from, to)
    }

    /// Returns the nearest neighbours of the city.
    pub fn neighbours(&self, city: usize) -> &NeighbourList {
        &self.cities[city].neighbours
    }

    /// Returns the city used as a starting point by some heuristics.
    pub fn start_city(&self) -> usize {
        self.start_city
    }

    /// Sets the city used as a starting point by some heuristics.
    pub fn set_start_city(&mut self, city: usize) -> GenericResult<()> {
        if city >= self.cities.len() && !(city == 0 && self.cities.is_empty()) {
            return Err(format!("start city {city} is out of range").into());
        }

        self.start_city = city;

        Ok(())
    }

    /// Returns the last computed lower bound, zero if it is not computed for the current instance.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Returns the known optimal tour.
    pub fn optimal_tour(&self) -> Option<&OptimalTour> {
        self.optimal.as_ref()
    }

    /// Returns the city at given position of the known optimal tour.
    pub fn optimal_city(&self, position: usize) -> Option<&City> {
        self.optimal.as_ref().and_then(|optimal| optimal.order.get(position)).map(|&city| &self.cities[city])
    }

    /// Returns the length of the known optimal tour, zero when it is unknown.
    pub fn optimal_length(&self) -> f64 {
        self.optimal.as_ref().map_or(0., |optimal| optimal.length)
    }

    /// Sets the known optimal tour and computes its length.
    pub fn set_optimal_tour(&mut self, order: &[usize]) -> GenericResult<()> {
        if order.len() != self.cities.len() {
            return Err(format!("optimal tour must visit all {} cities", self.cities.len()).into());
        }
        self.validate_order(order)?;

        let length = cyclic_length(&self.matrix, order);
        self.optimal = Some(OptimalTour { order: order.to_vec(), length });

        Ok(())
    }

    /// Returns amount of cities in the current tour.
    pub fn tour_size(&self) -> usize {
        self.tour.len()
    }

    /// Returns true if the tour visits every city.
    pub fn is_tour_complete(&self) -> bool {
        !self.cities.is_empty() && self.tour.len() == self.cities.len()
    }

    /// Returns city indices of the current tour in visiting order.
    pub fn tour(&self) -> &[usize] {
        self.tour.as_slice()
    }

    /// Returns the city at given tour position.
    pub fn tour_city(&self, position: usize) -> &City {
        &self.cities[self.tour[position]]
    }

    /// Returns the incrementally maintained tour length.
    pub fn tour_length(&self) -> f64 {
        self.tour_length
    }

    /// Computes tour length from the distance matrix. The closing edge is counted only when the
    /// tour is complete.
    pub fn recompute_tour_length(&self) -> f64 {
        let open = self.tour.windows(2).map(|w| self.matrix.distance(w[0], w[1])).sum::<f64>();

        open + self.closing_edge_length()
    }

    /// Length of the edge from the last tour city back to the first one, zero unless the tour is complete.
    pub(crate) fn closing_edge_length(&self) -> f64 {
        match (self.is_tour_complete(), self.tour.first(), self.tour.last()) {
            (true, Some(&first), Some(&last)) => self.matrix.distance(last, first),
            _ => 0.,
        }
    }

    /// Sets the current tour, e.g. loaded externally or restored by undo.
    pub fn set_tour(&mut self, order: &[usize], length: f64) -> GenericResult<()> {
        if order.len() > self.cities.len() {
            return Err(format!("tour has {} cities, but instance only {}", order.len(), self.cities.len()).into());
        }
        self.validate_order(order)?;

        self.clear_tour();
        order.iter().enumerate().for_each(|(position, &city)| self.cities[city].tour_index = Some(position));
        self.tour = order.to_vec();
        self.tour_length = length;

        Ok(())
    }

    /// Removes the current tour.
    pub fn clear_tour(&mut self) {
        self.tour.iter().for_each(|&city| self.cities[city].tour_index = None);
        self.tour.clear();
        self.tour_length = 0.;
    }

    /// Returns a copy of the current tour.
    pub fn snapshot_tour(&self) -> TourSnapshot {
        TourSnapshot { order: self.tour.clone(), length: self.tour_length }
    }

    /// Restores the tour from the snapshot.
    pub fn restore_tour(&mut self, snapshot: TourSnapshot) -> GenericResult<()> {
        self.set_tour(&snapshot.order, snapshot.length)
    }

    /// Returns the bounding box of all cities.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.cities.first()?.location;

        Some(self.cities.iter().fold(BoundingBox { min: first, max: first }, |bbox, city| BoundingBox {
            min: Point::new(bbox.min.x.min(city.x()), bbox.min.y.min(city.y())),
            max: Point::new(bbox.max.x.max(city.x()), bbox.max.y.max(city.y())),
        }))
    }

    /// Reverses the cyclic tour segment from position `from` to position `to` inclusive, wrapping
    /// around the end of the tour when `from > to`. Tour indices of moved cities are updated.
    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        let size = self.tour.len();
        if size == 0 || from == to {
            return;
        }

        let span = if from < to { to - from + 1 } else { to + size - from + 1 };
        let (mut left, mut right) = (from, to);

        for _ in 0..span / 2 {
            self.tour.swap(left, right);
            self.cities[self.tour[left]].tour_index = Some(left);
            self.cities[self.tour[right]].tour_index = Some(right);

            left = (left + 1) % size;
            right = if right == 0 { size - 1 } else { right - 1 };
        }
    }

    /// Returns the position of the city in the tour.
    ///
    /// # Panics
    /// When the city does not belong to the tour.
    #[inline]
    pub fn position(&self, city: usize) -> usize {
        self.cities[city].tour_index.expect("city must belong to the tour")
    }

    /// Returns the city which follows given one in the tour.
    #[inline]
    pub fn successor(&self, city: usize) -> usize {
        self.tour[(self.position(city) + 1) % self.tour.len()]
    }

    /// Returns the city which precedes given one in the tour.
    #[inline]
    pub fn predecessor(&self, city: usize) -> usize {
        let position = self.position(city);
        self.tour[if position > 0 { position - 1 } else { self.tour.len() - 1 }]
    }

    /// Appends the city to the end of the partial tour. When the tour becomes complete, the
    /// closing edge is added to the tour length.
    pub(crate) fn push_tour_node(&mut self, city: usize) {
        if self.tour.len() >= self.cities.len() {
            return;
        }

        if let Some(&last) = self.tour.last() {
            self.tour_length += self.matrix.distance(last, city);
        }

        self.cities[city].tour_index = Some(self.tour.len());
        self.tour.push(city);

        if self.tour.len() == self.cities.len() {
            self.tour_length += self.matrix.distance(city, self.tour[0]);
        }
    }

    pub(crate) fn add_tour_length(&mut self, delta: f64) {
        self.tour_length += delta;
    }

    pub(crate) fn set_lower_bound(&mut self, lower_bound: f64) {
        self.lower_bound = lower_bound;
    }

    /// Resets values which are not valid anymore once the instance is edited.
    pub(crate) fn invalidate_derived(&mut self) {
        self.lower_bound = 0.;
        self.optimal = None;
    }

    pub(crate) fn rebuild_neighbours(&mut self, city: usize) {
        fill_neighbours(&mut self.cities[city].neighbours, &self.matrix, city);
    }

    fn validate_order(&self, order: &[usize]) -> GenericResult<()> {
        let mut visited = vec![false; self.cities.len()];

        order.iter().try_for_each(|&city| match visited.get_mut(city) {
            Some(true) => Err(GenericError::from(format!("city {city} is visited more than once"))),
            Some(is_visited) => {
                *is_visited = true;
                Ok(())
            }
            None => Err(GenericError::from(format!("city {city} is out of range"))),
        })
    }
}

fn fill_neighbours(neighbours: &mut NeighbourList, matrix: &DistanceMatrix, city: usize) {
    neighbours.clear();
    matrix.row(city).iter().enumerate().filter(|&(other, _)| other != city).for_each(|(other, &distance)| {
        neighbours.add(other, distance);
    });
}

pub(crate) fn cyclic_length(matrix: &DistanceMatrix, order: &[usize]) -> f64 {
    match (order.first(), order.last()) {
        (Some(&first), Some(&last)) => {
            order.windows(2).map(|w| matrix.distance(w[0], w[1])).sum::<f64>() + matrix.distance(last, first)
        }
        _ => 0.,
    }
}
