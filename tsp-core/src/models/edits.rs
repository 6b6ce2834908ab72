#[cfg(test)]
#[path = "../../tests/unit/models/edits_test.rs"]
mod edits_test;

use crate::models::{CITIES_CAPACITY, City, EdgeWeightKind, InstanceState, Point};
use crate::utils::{GenericResult, Random};

/// Keeps everything needed to put a deleted city back.
#[derive(Clone, Debug, PartialEq)]
pub struct RemovedCity {
    /// Coordinates of the city.
    pub location: Point,
    /// Former index of the city.
    pub num: usize,
    /// Former tour position of the city.
    pub tour_index: Option<usize>,
}

impl InstanceState {
    /// Adds a new city. When the tour has more than one city, the new one is spliced in front of
    /// its nearest neighbour. Returns the index of the new city.
    pub fn add_city(&mut self, location: Point) -> GenericResult<usize> {
        if self.cities.len() >= CITIES_CAPACITY {
            return Err(format!("cannot add city: capacity {CITIES_CAPACITY} is reached").into());
        }
        check_location(&location)?;

        self.tour_length -= self.closing_edge_length();
        let index = self.cities.len();
        self.matrix.insert(index);
        self.cities.push(City::new(location, index));

        (0..index).for_each(|other| {
            let distance = location.distance_to(&self.cities[other].location);
            self.matrix.set(index, other, distance);
            self.cities[other].neighbours.add(index, distance);
        });
        self.rebuild_neighbours(index);
        self.invalidate_derived();

        if self.tour.len() > 1 {
            let position = self.cities[index]
                .neighbours
                .first()
                .and_then(|nearest| self.cities[nearest.city].tour_index)
                .unwrap_or(0);
            self.insert_into_tour(index, position);
        }
        self.tour_length += self.closing_edge_length();

        Ok(index)
    }

    /// Moves the city to a new location. Only neighbour lists which can be affected by the move
    /// are rebuilt.
    pub fn move_city(&mut self, index: usize, location: Point) -> GenericResult<()> {
        self.check_index(index)?;
        check_location(&location)?;

        let position = self.cities[index].tour_index;
        let edges_length = |state: &Self| position.map_or(0., |position| state.path_edges_length(position));
        self.tour_length -= self.closing_edge_length() + edges_length(self);

        self.cities[index].location = location;
        let old_distances = self.matrix.row(index).to_vec();

        (0..self.cities.len()).filter(|&other| other != index).for_each(|other| {
            let distance = location.distance_to(&self.cities[other].location);
            self.matrix.set(index, other, distance);
        });

        (0..self.cities.len()).for_each(|other| {
            let farthest = self.cities[other].neighbours.farthest();
            if farthest >= old_distances[other] || farthest >= self.matrix.distance(other, index) {
                self.rebuild_neighbours(other);
            }
        });

        self.tour_length += self.closing_edge_length() + edges_length(self);
        self.invalidate_derived();

        Ok(())
    }

    /// Deletes the city. The tour is closed around the gap and all indices behind the deleted city
    /// are shifted down.
    pub fn delete_city(&mut self, index: usize) -> GenericResult<RemovedCity> {
        self.check_index(index)?;

        let removed = RemovedCity {
            location: self.cities[index].location,
            num: index,
            tour_index: self.cities[index].tour_index,
        };

        self.tour_length -= self.closing_edge_length();
        if let Some(position) = removed.tour_index {
            self.tour_length -= self.path_edges_length(position);
            if let (Some(prev), Some(next)) = self.path_neighbours(position) {
                self.tour_length += self.matrix.distance(prev, next);
            }
        }

        let old_distances = self.matrix.remove(index);
        self.cities.remove(index);
        self.cities.iter_mut().skip(index).for_each(|city| city.num -= 1);

        if let Some(position) = removed.tour_index {
            self.tour.remove(position);
        }
        self.tour.iter_mut().filter(|city| **city > index).for_each(|city| *city -= 1);
        self.reindex_tour(removed.tour_index.unwrap_or(0));
        self.tour_length = if self.tour.is_empty() { 0. } else { self.tour_length + self.closing_edge_length() };

        (0..self.cities.len()).for_each(|other| {
            if self.cities[other].neighbours.farthest() >= old_distances[other] {
                self.rebuild_neighbours(other);
            } else {
                self.cities[other].neighbours.shift_after_removal(index);
            }
        });

        self.start_city = match self.start_city {
            start if start == index => 0,
            start if start > index => start - 1,
            start => start,
        };
        self.invalidate_derived();

        Ok(removed)
    }

    /// Puts the deleted city back at its former index and tour position.
    pub fn restore_city(&mut self, removed: RemovedCity) -> GenericResult<()> {
        let index = removed.num;
        if index > self.cities.len() {
            return Err(format!("cannot restore city at index {index}: out of range").into());
        }
        if self.cities.len() >= CITIES_CAPACITY {
            return Err(format!("cannot restore city: capacity {CITIES_CAPACITY} is reached").into());
        }
        check_location(&removed.location)?;

        self.tour_length -= self.closing_edge_length();
        self.matrix.insert(index);
        self.cities.insert(index, City::new(removed.location, index));
        self.cities.iter_mut().skip(index + 1).for_each(|city| city.num += 1);
        self.tour.iter_mut().filter(|city| **city >= index).for_each(|city| *city += 1);

        (0..self.cities.len()).filter(|&other| other != index).for_each(|other| {
            let distance = removed.location.distance_to(&self.cities[other].location);
            self.matrix.set(index, other, distance);

            let neighbours = &mut self.cities[other].neighbours;
            neighbours.shift_after_insertion(index);
            neighbours.add(index, distance);
        });
        self.rebuild_neighbours(index);

        if self.start_city >= index && self.cities.len() > 1 {
            self.start_city += 1;
        }

        match removed.tour_index {
            Some(position) if !self.tour.is_empty() && position <= self.tour.len() => {
                self.insert_into_tour(index, position)
            }
            _ => {}
        }
        self.tour_length += self.closing_edge_length();
        self.invalidate_derived();

        Ok(())
    }

    /// Replaces the instance with `count` cities placed at random integer coordinates within
    /// `[0, width) x [0, height)`. Progress is reported in percents.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        count: usize,
        random: &dyn Random,
        progress: &mut dyn FnMut(u8),
    ) -> GenericResult<()> {
        if count > CITIES_CAPACITY {
            return Err(format!("cannot generate {count} cities: capacity is {CITIES_CAPACITY}").into());
        }
        if width < 1 || height < 1 {
            return Err(format!("invalid generation area: {width}x{height}").into());
        }

        let step = (count / 100).max(1);
        let points = (0..count)
            .map(|idx| {
                if idx % step == 0 {
                    progress((idx * 100 / count) as u8);
                }
                Point::new(random.uniform_int(0, width - 1) as f64, random.uniform_int(0, height - 1) as f64)
            })
            .collect::<Vec<_>>();

        self.set_instance(&points, None, EdgeWeightKind::Euc2D)?;
        progress(100);

        Ok(())
    }

    /// Splices the city into the tour as into an open path: the closing edge is accounted for by
    /// the caller.
    fn insert_into_tour(&mut self, city: usize, position: usize) {
        let prev = position.checked_sub(1).map(|prev| self.tour[prev]);
        let next = self.tour.get(position).copied();

        self.tour.insert(position, city);
        self.reindex_tour(position);

        self.tour_length += self.path_edges_length(position);
        if let (Some(prev), Some(next)) = (prev, next) {
            self.tour_length -= self.matrix.distance(prev, next);
        }
    }

    fn reindex_tour(&mut self, from: usize) {
        (from..self.tour.len()).for_each(|position| self.cities[self.tour[position]].tour_index = Some(position));
    }

    fn path_neighbours(&self, position: usize) -> (Option<usize>, Option<usize>) {
        (position.checked_sub(1).map(|prev| self.tour[prev]), self.tour.get(position + 1).copied())
    }

    /// Length of the tour edges touching the given position, the closing edge excluded.
    fn path_edges_length(&self, position: usize) -> f64 {
        let city = self.tour[position];
        let (prev, next) = self.path_neighbours(position);

        [prev, next].into_iter().flatten().map(|other| self.matrix.distance(city, other)).sum()
    }

    fn check_index(&self, index: usize) -> GenericResult<()> {
        if index < self.cities.len() { Ok(()) } else { Err(format!("city index {index} is out of range").into()) }
    }
}

fn check_location(location: &Point) -> GenericResult<()> {
    if location.x.is_finite() && location.y.is_finite() {
        Ok(())
    } else {
        Err("city location must be finite".into())
    }
}
