use std::sync::atomic::{AtomicBool, Ordering};

static DIAGNOSTICS: AtomicBool = AtomicBool::new(true);

/// Turns failure diagnostics on or off for the whole process.
///
/// When enabled, every rejected request is also reported through the [`log`] facade at `warn`
/// level along with the stage it failed at. Results are the same either way.
pub fn set_diagnostics_enabled(enabled: bool) {
    DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

pub fn diagnostics_enabled() -> bool {
    DIAGNOSTICS.load(Ordering::Relaxed)
}
