//! This module contains the model of the problem: cities with their nearest neighbours, the
//! distance matrix and the shared instance state with the current tour.

mod city;
pub use self::city::*;

mod edits;
pub use self::edits::RemovedCity;

mod instance;
pub use self::instance::*;

mod matrix;
pub use self::matrix::DistanceMatrix;
