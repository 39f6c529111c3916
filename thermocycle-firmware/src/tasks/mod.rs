//! Embassy async tasks
//!
//! Two contexts, exactly as the synchronization model requires: the
//! cycle timer (producer) and the pipeline loop (consumer).

pub mod cycle_timer;
pub mod pipeline;

pub use cycle_timer::cycle_timer_task;
pub use pipeline::{pipeline_task, BoardChain, BoardReporter};
