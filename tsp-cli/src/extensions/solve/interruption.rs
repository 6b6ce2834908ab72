//! Interruption handler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tsp_core::prelude::*;

static INTERRUPTION_FLAG: OnceLock<Result<Arc<AtomicBool>, String>> = OnceLock::new();

/// Creates a quota which is reached on Ctrl-C or when optional max time in seconds is elapsed.
/// The Ctrl-C handler is installed once per process and shared by all created quotas.
pub fn create_interruption_quota(max_time: Option<usize>) -> Result<Arc<dyn Quota + Send + Sync>, String> {
    let inner = Environment::new_with_time_quota(max_time).quota;
    let should_interrupt = INTERRUPTION_FLAG.get_or_init(install_handler).clone()?;

    Ok(Arc::new(InterruptionQuota { inner, should_interrupt }))
}

fn install_handler() -> Result<Arc<AtomicBool>, String> {
    let should_interrupt = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'"))?;

    Ok(should_interrupt)
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
