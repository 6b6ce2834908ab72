//! This module reimports commonly used types.

pub use crate::construction::ConstructionKind;
pub use crate::improvement::{ImprovementKind, held_karp_bound};
pub use crate::models::{CITIES_CAPACITY, City, EdgeWeightKind, InstanceState, Point, RemovedCity};
pub use crate::solver::{
    AnimationPort, EditKind, HeuristicKind, NoAnimation, RunOutcome, Settings, Solver, TaskHandle,
};
pub use crate::utils::{
    DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Quota, Random, RunControl, TimeQuota,
};
