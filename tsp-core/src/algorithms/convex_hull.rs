#[cfg(test)]
#[path = "../../tests/unit/algorithms/convex_hull_test.rs"]
mod convex_hull_test;

use crate::models::City;
use std::iter::successors;

#[derive(Clone, Copy, Debug, Default)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

/// Keeps two doubly linked lists over cities stored in one arena: the free cities which are not
/// placed yet and the placed ones forming a cyclic partial tour. Every city belongs to exactly one
/// of them.
pub struct ConvexHullList {
    links: Vec<Link>,
    free_head: Option<usize>,
    free_len: usize,
    tour_head: Option<usize>,
    tour_len: usize,
}

impl ConvexHullList {
    /// Creates lists where all cities are free.
    pub fn new(size: usize) -> Self {
        let links = (0..size)
            .map(|idx| Link {
                prev: if idx > 0 { Some(idx - 1) } else { None },
                next: if idx + 1 < size { Some(idx + 1) } else { None },
            })
            .collect();

        Self { links, free_head: if size > 0 { Some(0) } else { None }, free_len: size, tour_head: None, tour_len: 0 }
    }

    /// Builds the convex hull of free cities using gift wrapping and places its cities into the
    /// tour in counterclockwise order starting from the lowest one. The callback is called for
    /// every hull edge and can stop the process by returning false. Returns false when stopped.
    pub fn build_hull(&mut self, cities: &[City], on_edge: &mut dyn FnMut(usize, usize) -> bool) -> bool {
        let Some(start) = self.free_nodes().reduce(|lowest, city| {
            if cities[city].y() < cities[lowest].y() { city } else { lowest }
        }) else {
            return true;
        };

        self.remove_free(start);
        self.append_tour(start);

        let mut current = start;
        loop {
            let origin = cities[current].location;
            let candidates = self.free_nodes().chain((current != start).then_some(start));

            let best = candidates.fold(None, |best: Option<usize>, candidate| {
                let Some(best) = best else { return Some(candidate) };

                let (to_best, to_candidate) = (cities[best].location, cities[candidate].location);
                let cross = (to_best.x - origin.x) * (to_candidate.y - origin.y)
                    - (to_best.y - origin.y) * (to_candidate.x - origin.x);
                let is_farther = origin.distance_to(&to_candidate) > origin.distance_to(&to_best);

                Some(if cross < 0. || (cross == 0. && is_farther) { candidate } else { best })
            });

            match best {
                Some(best) if best != start => {
                    self.remove_free(best);
                    self.append_tour(best);

                    if !on_edge(current, best) {
                        return false;
                    }
                    current = best;
                }
                Some(_) => return on_edge(current, start),
                None => return true,
            }
        }
    }

    /// Moves the free city into the tour right after the placed city `after`.
    pub fn insert_after(&mut self, after: usize, city: usize) {
        self.remove_free(city);

        let next = self.links[after].next.unwrap_or(after);
        self.links[city] = Link { prev: Some(after), next: Some(next) };
        self.links[after].next = Some(city);
        self.links[next].prev = Some(city);
        self.tour_len += 1;
    }

    /// Returns the city which follows the placed city in the tour.
    pub fn next(&self, city: usize) -> usize {
        self.links[city].next.unwrap_or(city)
    }

    /// Returns amount of free cities.
    pub fn free_len(&self) -> usize {
        self.free_len
    }

    /// Returns the free city at given position of the free list.
    pub fn nth_free(&self, position: usize) -> Option<usize> {
        self.free_nodes().nth(position)
    }

    /// Returns an iterator over free cities.
    pub fn free_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        successors(self.free_head, |&city| self.links[city].next)
    }

    /// Returns amount of placed cities.
    pub fn tour_len(&self) -> usize {
        self.tour_len
    }

    /// Returns an iterator over placed cities in tour order.
    pub fn tour_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        successors(self.tour_head, |&city| self.links[city].next).take(self.tour_len)
    }

    fn remove_free(&mut self, city: usize) {
        let Link { prev, next } = self.links[city];

        match prev {
            Some(prev) => self.links[prev].next = next,
            None => self.free_head = next,
        }
        if let Some(next) = next {
            self.links[next].prev = prev;
        }

        self.links[city] = Link::default();
        self.free_len -= 1;
    }

    fn append_tour(&mut self, city: usize) {
        match self.tour_head {
            Some(head) => {
                let tail = self.links[head].prev.unwrap_or(head);
                self.links[city] = Link { prev: Some(tail), next: Some(head) };
                self.links[tail].next = Some(city);
                self.links[head].prev = Some(city);
            }
            None => {
                self.links[city] = Link { prev: Some(city), next: Some(city) };
                self.tour_head = Some(city);
            }
        }

        self.tour_len += 1;
    }
}
