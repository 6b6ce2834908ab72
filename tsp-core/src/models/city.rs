#[cfg(test)]
#[path = "../../tests/unit/models/city_test.rs"]
mod city_test;

use serde::{Deserialize, Serialize};

/// Max amount of nearest neighbours kept per city.
pub const NEIGHBOURS_LIST_SIZE: usize = 30;

/// A point on euclidean plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A city which is close to another one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// Index of the neighbour city.
    pub city: usize,
    /// Distance to the neighbour city.
    pub distance: f64,
}

/// A bounded list of the nearest cities sorted by distance in ascending order.
#[derive(Clone, Debug, Default)]
pub struct NeighbourList {
    items: Vec<Neighbour>,
    farthest: f64,
}

impl NeighbourList {
    /// Tries to add a candidate. The candidate is accepted only when the list is not full yet or
    /// when it is closer than the current farthest neighbour, which is evicted then.
    /// Candidates with equal distance are placed in front of existing ones.
    pub fn add(&mut self, city: usize, distance: f64) -> bool {
        let is_full = self.items.len() >= NEIGHBOURS_LIST_SIZE;
        if is_full && self.farthest <= distance {
            return false;
        }

        let position = self.items.iter().position(|n| n.distance >= distance).unwrap_or(self.items.len());
        if is_full {
            self.items.pop();
        }
        self.items.insert(position, Neighbour { city, distance });
        self.farthest = self.items.last().map_or(0., |n| n.distance);

        true
    }

    /// Removes all neighbours.
    pub fn clear(&mut self) {
        self.items.clear();
        self.farthest = 0.;
    }

    /// Returns distance to the farthest city kept in the list.
    pub fn farthest(&self) -> f64 {
        self.farthest
    }

    /// Returns neighbours sorted by distance.
    pub fn as_slice(&self) -> &[Neighbour] {
        self.items.as_slice()
    }

    /// Returns an iterator over neighbours.
    pub fn iter(&self) -> impl Iterator<Item = &Neighbour> + '_ {
        self.items.iter()
    }

    /// Returns the nearest neighbour.
    pub fn first(&self) -> Option<&Neighbour> {
        self.items.first()
    }

    /// Returns amount of neighbours.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there is no neighbours.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shifts neighbour indices after city removal at `removed` index. The removed city itself
    /// must not be present in the list.
    pub(crate) fn shift_after_removal(&mut self, removed: usize) {
        self.items.iter_mut().filter(|n| n.city > removed).for_each(|n| n.city -= 1);
    }

    /// Shifts neighbour indices after city insertion at `inserted` index.
    pub(crate) fn shift_after_insertion(&mut self, inserted: usize) {
        self.items.iter_mut().filter(|n| n.city >= inserted).for_each(|n| n.city += 1);
    }
}

/// A node of the graph: a city with its coordinates, position in the current tour and a list
/// of its nearest neighbours.
#[derive(Clone, Debug)]
pub struct City {
    /// Coordinates of the city.
    pub location: Point,
    /// Index of the city in the instance (insertion order).
    pub num: usize,
    /// Position of the city in the current tour, if the city belongs to it.
    pub tour_index: Option<usize>,
    pub(crate) neighbours: NeighbourList,
}

impl City {
    /// Creates a new city which does not belong to any tour.
    pub fn new(location: Point, num: usize) -> Self {
        Self { location, num, tour_index: None, neighbours: NeighbourList::default() }
    }

    /// Returns x coordinate.
    pub fn x(&self) -> f64 {
        self.location.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> f64 {
        self.location.y
    }

    /// Returns the nearest neighbours of the city.
    pub fn neighbours(&self) -> &NeighbourList {
        &self.neighbours
    }
}
