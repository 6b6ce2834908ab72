use serde::{Deserialize, Serialize};

/// Default pause between two animated steps, in milliseconds.
pub const DEFAULT_STEP_TIME: u64 = 200;

/// Specifies how heuristic runs are presented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Emits animation events and pauses after every step when set.
    pub animated: bool,
    /// Pause after an animated step, in milliseconds.
    pub step_time: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { animated: false, step_time: DEFAULT_STEP_TIME }
    }
}
