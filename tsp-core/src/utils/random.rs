#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::{Mutex, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;
}

/// A default random implementation which is backed by small and fast, not cryptographically
/// secure, generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` with repeatable (predictable) random generation.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max + 1))
    }
}
