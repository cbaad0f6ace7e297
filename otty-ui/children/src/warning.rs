use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

/// Guard for warnings that should be logged at most once.
///
/// The guard is a plain value so tests and embedders can own one and pass it
/// through [`TraverseOptions`](crate::TraverseOptions); traversals that use
/// the defaults share [`MAP_ENTRIES_WARNING`].
#[derive(Debug, Default)]
pub struct OnceWarning {
    fired: AtomicBool,
}

/// Process-wide guard for the "maps used as children" warning.
pub static MAP_ENTRIES_WARNING: OnceWarning = OnceWarning::new();

impl OnceWarning {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Log `message` unless this guard already fired.
    ///
    /// Returns `true` when the message was emitted by this call.
    pub fn warn(&self, message: &str) -> bool {
        if self.fired.swap(true, Ordering::Relaxed) {
            return false;
        }
        warn!("{message}");
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }

    /// Re-arm the guard.
    pub fn reset(&self) {
        self.fired.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_only_until_reset() {
        let guard = OnceWarning::new();
        assert!(!guard.has_fired());

        assert!(guard.warn("first"));
        assert!(!guard.warn("second"));
        assert!(guard.has_fired());

        guard.reset();
        assert!(guard.warn("again"));
    }
}
