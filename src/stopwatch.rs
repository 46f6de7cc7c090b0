//! Pausable stopwatch accumulating per-session statistics.
//!
//! A *session* is one start-to-stop interval, possibly spanning several
//! pause/resume cycles; only time spent running counts. Each completed
//! session feeds exactly one sample (its total duration) into the embedded
//! [`StatAccumulator`], so repeated timing of the same code region yields
//! count/min/max/mean/variance over the per-invocation durations.
//!
//! The stopwatch is single-threaded by design: every operation is one clock
//! read plus a handful of integer arithmetic, so it can wrap hot-path code
//! without perturbing what it measures. Wrap it in external synchronization
//! if it must be shared.

use crate::clock::{ManualClock, MonotonicClock, SystemClock};
use crate::stats::StatAccumulator;

/// Stopwatch lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No session in progress.
    Idle,
    /// A segment is currently being timed.
    Running,
    /// Mid-session, but the clock is not accumulating.
    Paused,
}

/// A pausable stopwatch over a monotonic clock.
///
/// Invalid transitions (e.g. `pause()` while idle) are caller errors and
/// panic rather than silently corrupting the timing data.
///
/// # Examples
/// ```
/// use stopstat::PausableStopwatch;
///
/// let mut sw = PausableStopwatch::new();
/// for _ in 0..3 {
///     sw.start();
///     // ... region under measurement ...
///     sw.stop();
/// }
/// assert_eq!(sw.num_samples(), 3);
/// ```
#[derive(Debug)]
pub struct PausableStopwatch<C: MonotonicClock = SystemClock> {
    state: State,
    /// Timestamp of the start of the current segment; meaningful only while
    /// `Running`.
    segment_start: u64,
    /// Completed-segment time of the in-progress session.
    accumulated_ns: u64,
    stats: StatAccumulator,
    clock: C,
}

impl PausableStopwatch<SystemClock> {
    /// Create an idle stopwatch on the system monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for PausableStopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl PausableStopwatch<ManualClock> {
    /// Create an idle stopwatch on a fresh [`ManualClock`], for tests.
    pub fn with_manual_clock() -> Self {
        Self::with_clock(ManualClock::new())
    }
}

impl<C: MonotonicClock> PausableStopwatch<C> {
    /// Create an idle stopwatch reading timestamps from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: State::Idle,
            segment_start: 0,
            accumulated_ns: 0,
            stats: StatAccumulator::new(),
            clock,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The clock this stopwatch reads from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Begin a new session. Valid only while `Idle`.
    ///
    /// # Panics
    /// Panics if the stopwatch is not idle.
    pub fn start(&mut self) {
        assert!(
            self.state == State::Idle,
            "start() requires an idle stopwatch (state: {:?})",
            self.state
        );
        self.accumulated_ns = 0;
        self.segment_start = self.clock.now_ns();
        self.state = State::Running;
    }

    /// End the session, recording its total duration as one sample.
    ///
    /// Returns the session duration in nanoseconds and leaves the stopwatch
    /// idle, ready for the next `start()`.
    ///
    /// # Panics
    /// Panics if the stopwatch is not running.
    pub fn stop(&mut self) -> u64 {
        assert!(
            self.state == State::Running,
            "stop() requires a running stopwatch (state: {:?})",
            self.state
        );
        self.accumulated_ns += self.clock.now_ns() - self.segment_start;
        let session_ns = self.accumulated_ns;
        self.stats.add_sample(session_ns);
        self.accumulated_ns = 0;
        self.state = State::Idle;
        session_ns
    }

    /// Suspend timing without ending the session.
    ///
    /// # Panics
    /// Panics if the stopwatch is not running.
    pub fn pause(&mut self) {
        assert!(
            self.state == State::Running,
            "pause() requires a running stopwatch (state: {:?})",
            self.state
        );
        self.accumulated_ns += self.clock.now_ns() - self.segment_start;
        self.state = State::Paused;
    }

    /// Resume a paused session; time spent paused is excluded.
    ///
    /// # Panics
    /// Panics if the stopwatch is not paused.
    pub fn resume(&mut self) {
        assert!(
            self.state == State::Paused,
            "resume() requires a paused stopwatch (state: {:?})",
            self.state
        );
        self.segment_start = self.clock.now_ns();
        self.state = State::Running;
    }

    /// Discard the in-progress session and start timing a new one.
    ///
    /// No sample is recorded for the discarded session. Valid while
    /// `Running` or `Paused`.
    ///
    /// # Panics
    /// Panics if the stopwatch is idle.
    pub fn restart(&mut self) {
        assert!(
            self.state != State::Idle,
            "restart() requires an in-progress session (state: {:?})",
            self.state
        );
        self.accumulated_ns = 0;
        self.segment_start = self.clock.now_ns();
        self.state = State::Running;
    }

    /// Return to `Idle` and clear the accumulated statistics entirely.
    ///
    /// Valid from any state.
    pub fn reset(&mut self) {
        self.accumulated_ns = 0;
        self.stats.reset();
        self.state = State::Idle;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Elapsed running time of the current session, in nanoseconds.
    ///
    /// While `Running` this includes the open segment; while `Paused` it is
    /// the completed-segment total; while `Idle` it is 0.
    pub fn elapsed_ns(&self) -> u64 {
        match self.state {
            State::Running => self.accumulated_ns + (self.clock.now_ns() - self.segment_start),
            State::Paused | State::Idle => self.accumulated_ns,
        }
    }

    /// The statistics accumulated over completed sessions.
    pub fn stats(&self) -> &StatAccumulator {
        &self.stats
    }

    /// Number of completed sessions.
    pub fn num_samples(&self) -> u64 {
        self.stats.count()
    }

    /// Total time across all completed sessions, in nanoseconds.
    pub fn total_ns(&self) -> u64 {
        self.stats.total_ns()
    }

    /// Shortest completed session, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no session has completed.
    pub fn min_ns(&self) -> u64 {
        self.stats.min_ns()
    }

    /// Longest completed session, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no session has completed.
    pub fn max_ns(&self) -> u64 {
        self.stats.max_ns()
    }

    /// Mean session duration, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no session has completed.
    pub fn mean(&self) -> f64 {
        self.stats.mean()
    }

    /// Population variance of session durations, in ns².
    ///
    /// # Panics
    /// Panics if no session has completed.
    pub fn variance(&self) -> f64 {
        self.stats.variance()
    }

    /// Population standard deviation of session durations, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no session has completed.
    pub fn stddev(&self) -> f64 {
        self.stats.stddev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stopwatch_is_idle_and_empty() {
        let sw = PausableStopwatch::with_manual_clock();
        assert_eq!(sw.state(), State::Idle);
        assert_eq!(sw.elapsed_ns(), 0);
        assert_eq!(sw.num_samples(), 0);
    }

    #[test]
    fn zero_duration_session_records_a_zero_sample() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        let session = sw.stop();
        assert_eq!(session, 0);
        assert_eq!(sw.num_samples(), 1);
        assert_eq!(sw.total_ns(), 0);
        assert_eq!(sw.min_ns(), 0);
        assert_eq!(sw.max_ns(), 0);
    }

    #[test]
    fn elapsed_includes_the_open_segment() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(250);
        assert_eq!(sw.elapsed_ns(), 250);
        sw.clock().advance(50);
        assert_eq!(sw.elapsed_ns(), 300);
    }

    #[test]
    fn paused_time_is_excluded() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(100);
        sw.pause();
        assert_eq!(sw.elapsed_ns(), 100);

        // A long pause must not show up anywhere.
        sw.clock().advance(1_000_000);
        assert_eq!(sw.elapsed_ns(), 100);

        sw.resume();
        sw.clock().advance(200);
        let session = sw.stop();
        assert_eq!(session, 300);
        assert_eq!(sw.num_samples(), 1);
        assert_eq!(sw.total_ns(), 300);
    }

    #[test]
    fn restart_discards_the_session_without_a_sample() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(500);
        sw.restart();
        assert_eq!(sw.num_samples(), 0);
        assert_eq!(sw.elapsed_ns(), 0);

        sw.clock().advance(40);
        assert_eq!(sw.stop(), 40);
        assert_eq!(sw.num_samples(), 1);
        assert_eq!(sw.total_ns(), 40);
    }

    #[test]
    fn restart_works_while_paused() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(75);
        sw.pause();
        sw.restart();
        assert_eq!(sw.state(), State::Running);
        sw.clock().advance(25);
        assert_eq!(sw.stop(), 25);
    }

    #[test]
    fn reset_returns_to_idle_and_clears_stats() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(10);
        sw.stop();
        sw.start();
        sw.clock().advance(10);
        sw.reset();
        assert_eq!(sw.state(), State::Idle);
        assert_eq!(sw.elapsed_ns(), 0);
        assert_eq!(sw.num_samples(), 0);
        assert_eq!(sw.total_ns(), 0);
    }

    #[test]
    fn stop_returns_the_session_duration() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.clock().advance(1234);
        assert_eq!(sw.stop(), 1234);
    }

    #[test]
    #[should_panic(expected = "start() requires an idle stopwatch")]
    fn double_start_panics() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.start();
    }

    #[test]
    #[should_panic(expected = "pause() requires a running stopwatch")]
    fn pause_while_idle_panics() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.pause();
    }

    #[test]
    #[should_panic(expected = "resume() requires a paused stopwatch")]
    fn resume_while_running_panics() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.resume();
    }

    #[test]
    #[should_panic(expected = "stop() requires a running stopwatch")]
    fn stop_while_paused_panics() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.start();
        sw.pause();
        sw.stop();
    }

    #[test]
    #[should_panic(expected = "restart() requires an in-progress session")]
    fn restart_while_idle_panics() {
        let mut sw = PausableStopwatch::with_manual_clock();
        sw.restart();
    }
}
