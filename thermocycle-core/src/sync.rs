//! Cycle synchronization between the timer and the main loop
//!
//! A capacity-1, overwrite-on-full event slot: the periodic timer sets a
//! pending-cycle flag from interrupt context, the cooperative main loop
//! takes it. A second signal before a take coalesces into the existing
//! flag, so backlog is bounded at one and a cycle is silently skipped
//! under sustained overrun instead of queueing unbounded work.

use portable_atomic::{AtomicBool, Ordering};

/// Pending-cycle flag shared between the timer context and the main loop
///
/// The only piece of state crossing the interrupt/main-loop boundary.
/// Single producer context, single consumer context; the atomic swap in
/// `take_pending_cycle` is the only mutual exclusion required.
#[derive(Debug)]
pub struct CycleSignal {
    pending: AtomicBool,
}

impl CycleSignal {
    /// Create a signal with no cycle pending (process startup state)
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a cycle as due. Producer (timer/interrupt) context only.
    ///
    /// Never blocks. Signaling while a cycle is already pending coalesces:
    /// the flag stays set and the extra trigger is dropped.
    pub fn signal_cycle(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Atomically read and clear the flag. Consumer (main loop) context only.
    ///
    /// Returns whether a cycle was pending.
    pub fn take_pending_cycle(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for CycleSignal {
    fn default() -> Self {
        Self::new()
    }
}
