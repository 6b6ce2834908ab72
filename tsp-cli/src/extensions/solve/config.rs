//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;
use tsp_core::prelude::*;

/// A solve configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies which heuristics are run.
    pub heuristics: Option<HeuristicsConfig>,
    /// Specifies animation settings.
    pub animation: Option<Settings>,
    /// Specifies run termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies random generator configuration.
    pub random: Option<RandomConfig>,
}

/// Specifies the heuristic pipeline.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicsConfig {
    /// A tour construction heuristic.
    pub construction: Option<ConstructionKind>,
    /// Improvement heuristics applied in given order.
    pub improvements: Option<Vec<ImprovementKind>>,
    /// Whether the Held-Karp lower bound is computed at the end.
    pub lower_bound: Option<bool>,
    /// A start city index.
    pub start_city: Option<usize>,
}

/// A termination configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time of the whole pipeline in seconds.
    pub max_time: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// A random generator configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct RandomConfig {
    /// A seed which makes runs repeatable.
    pub seed: Option<u64>,
}

impl Config {
    /// Returns max time from termination configuration.
    pub fn max_time(&self) -> Option<usize> {
        self.termination.as_ref().and_then(|termination| termination.max_time)
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }

    /// Returns configured random seed.
    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|random| random.seed)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: R) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an environment using given config. An external quota, when passed, replaces the time
/// quota from the config.
pub fn create_environment_from_config(
    config: &Config,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
) -> Environment {
    let random: Arc<dyn Random + Send + Sync> = match config.seed() {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let logger: InfoLogger =
        if config.is_logging_enabled() { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let quota = quota.or_else(|| Environment::new_with_time_quota(config.max_time()).quota);

    Environment { random, quota, logger }
}
