//! Core application primitives (poll loop, schedule, entry point)

pub mod app;
pub mod monitor;
pub mod scheduler;

pub use app::{run_from_args, Launch};
pub use monitor::{PollOutcome, QuoteMonitor};
pub use scheduler::PollSchedule;
