use crate::utils::{DefaultRandom, Quota, Random, TimeQuota};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An external quota which stops every run once reached.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` using optional time quota and defaults.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        Self {
            quota: max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as f64))),
            ..Self::default()
        }
    }

    /// Returns true if the environment quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            random: Arc::new(DefaultRandom::default()),
            quota: None,
            logger: Arc::new(|msg| println!("{msg}")),
        }
    }
}
