//! Completion API availability latch.

use std::sync::atomic::{AtomicBool, Ordering};

/// One-way switch recording whether the completion API may still be called.
///
/// Starts available. [`mark_unavailable`](Self::mark_unavailable) flips it for
/// the lifetime of the value; there is no way back. Relaxed ordering is
/// enough: a stale read costs at most one extra remote call.
#[derive(Debug)]
pub struct ServiceAvailability {
    available: AtomicBool,
}

impl ServiceAvailability {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
        }
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// Trip the latch. Returns `true` if this call made the transition.
    pub fn mark_unavailable(&self) -> bool {
        self.available.swap(false, Ordering::Relaxed)
    }
}

impl Default for ServiceAvailability {
    fn default() -> Self {
        Self::new()
    }
}
