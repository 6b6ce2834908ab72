//! Core crate contains the building blocks to solve the ***Euclidean Traveling Salesman Problem***
//! interactively: a shared instance model which supports live editing, six tour construction
//! heuristics, two local search improvement heuristics and the Held-Karp lower bound.
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let mut state = InstanceState::default();
//! let points = [Point::new(0., 0.), Point::new(0., 1.), Point::new(1., 1.), Point::new(1., 0.)];
//! state.set_instance(&points, None, EdgeWeightKind::Euc2D).unwrap();
//!
//! let solver = Solver::default();
//! solver.run(&mut state, HeuristicKind::Construction(ConstructionKind::NearestNeighbor)).unwrap();
//!
//! assert_eq!(state.tour_size(), 4);
//! assert!((state.tour_length() - 4.).abs() < 1E-9);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod algorithms;
pub mod construction;
pub mod improvement;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
