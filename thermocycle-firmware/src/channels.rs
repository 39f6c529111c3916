//! Inter-context signaling
//!
//! The pending-cycle flag is the only state shared between the timer
//! context and the pipeline loop. The embassy `Signal` next to it is a
//! pure wake-up; like the flag, it is capacity-1 and overwrites, so it
//! cannot accumulate backlog either.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use thermocycle_core::sync::CycleSignal;

/// Pending-cycle flag (set by the cycle timer, taken by the pipeline)
pub static CYCLE_PENDING: CycleSignal = CycleSignal::new();

/// Wake-up for the pipeline task after each timer tick
pub static CYCLE_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
