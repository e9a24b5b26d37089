use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "worker is busy" flag. The UI disables the send controls while it
/// is set.
///
/// Not a lock: `acquire` always succeeds. Re-entry is prevented only by the
/// disabled controls.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn acquire(&self) -> SendGuard {
        self.0.store(true, Ordering::SeqCst);
        SendGuard { flag: self.clone() }
    }
}

/// Lowers the busy flag when dropped, on every exit path including unwinding.
/// It travels with the engine command, so the flag stays up until the worker
/// is done with it.
#[derive(Debug)]
#[must_use = "the busy flag is lowered as soon as the guard is dropped"]
pub struct SendGuard {
    flag: BusyFlag,
}

impl Drop for SendGuard {
    fn drop(&mut self) {
        self.flag.0.store(false, Ordering::SeqCst);
    }
}
