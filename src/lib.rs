//! Pausable stopwatch with running per-session statistics.
//!
//! This crate is a lightweight instrumentation primitive for answering "how
//! much time did section X consume, how many times did it run, and how
//! variable was each invocation?" without a full profiling framework. A
//! [`PausableStopwatch`] times start/stop sessions (with pause/resume
//! excluded from the measurement) on a monotonic clock, and feeds each
//! completed session's duration into an embedded [`StatAccumulator`] that
//! tracks count, total, min, max, mean, variance, and standard deviation
//! without storing individual samples.
//!
//! Timers are plain caller-owned values; keep as many independent ones as
//! the instrumentation needs. Presentation is separate: take a [`Report`]
//! snapshot and render it (plain or colored), or serialize it.
//!
//! # Usage
//!
//! ```
//! use stopstat::{PausableStopwatch, Report};
//!
//! let mut inner_loop = PausableStopwatch::new();
//! for _ in 0..10 {
//!     inner_loop.start();
//!     // ... region under measurement ...
//!     inner_loop.stop();
//! }
//! println!("{}", Report::new(&inner_loop));
//! ```

pub mod clock;
pub mod report;
pub mod stats;
pub mod stopwatch;
pub mod units;

// Re-export commonly used items at crate root
pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use report::{format_report_colored, format_report_plain, Report};
pub use stats::StatAccumulator;
pub use stopwatch::{PausableStopwatch, State};
