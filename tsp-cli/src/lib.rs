//! A command line interface library for the Euclidean TSP heuristics: configuration, interruption
//! handling, the solve pipeline and random instance generation.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
