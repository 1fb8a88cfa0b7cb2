pub mod scheduler;

pub use scheduler::{MAX_INTERVAL_SECS, RefreshScheduler, SchedulerState};
