//! Incremental statistics over a stream of nanosecond duration samples.
//!
//! [`StatAccumulator`] keeps only the running moments (count, total, sum of
//! squares) plus min/max, so it can sit inside a hot loop without allocating
//! or retaining individual samples. Mean, variance, and standard deviation
//! are derived on demand.

/// Running statistics accumulator for non-negative nanosecond samples.
///
/// Variance is the population (biased) estimator `(Σx²/n) − mean²`. The sum
/// of squares is kept in a `u128` so realistic durations times realistic
/// sample counts cannot overflow.
#[derive(Debug, Clone)]
pub struct StatAccumulator {
    count: u64,
    total: u64,
    sum_of_squares: u128,
    min: u64,
    max: u64,
}

impl StatAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            total: 0,
            sum_of_squares: 0,
            min: u64::MAX,
            max: 0,
        }
    }

    /// Clear all accumulated state back to the empty accumulator.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record one sample (a duration in nanoseconds).
    ///
    /// The first sample sets both min and max.
    pub fn add_sample(&mut self, value: u64) {
        self.count += 1;
        self.total += value;
        self.sum_of_squares += (value as u128) * (value as u128);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Number of samples observed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all samples, in nanoseconds.
    pub fn total_ns(&self) -> u64 {
        self.total
    }

    /// Smallest sample seen, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no sample has been recorded. Callers gate on `count() > 0`.
    pub fn min_ns(&self) -> u64 {
        assert!(self.count > 0, "min_ns() requires at least one sample");
        self.min
    }

    /// Largest sample seen, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no sample has been recorded. Callers gate on `count() > 0`.
    pub fn max_ns(&self) -> u64 {
        assert!(self.count > 0, "max_ns() requires at least one sample");
        self.max
    }

    /// Mean sample value, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no sample has been recorded. Callers gate on `count() > 0`.
    pub fn mean(&self) -> f64 {
        assert!(self.count > 0, "mean() requires at least one sample");
        self.total as f64 / self.count as f64
    }

    /// Population variance of the samples, in ns².
    ///
    /// Computed as `(Σx²/n) − mean²` and clamped at zero, since floating
    /// rounding can otherwise produce a tiny negative value when all samples
    /// are (nearly) identical.
    ///
    /// # Panics
    /// Panics if no sample has been recorded. Callers gate on `count() > 0`.
    pub fn variance(&self) -> f64 {
        assert!(self.count > 0, "variance() requires at least one sample");
        let mean = self.total as f64 / self.count as f64;
        let mean_sq = self.sum_of_squares as f64 / self.count as f64;
        (mean_sq - mean * mean).max(0.0)
    }

    /// Population standard deviation of the samples, in nanoseconds.
    ///
    /// # Panics
    /// Panics if no sample has been recorded. Callers gate on `count() > 0`.
    pub fn stddev(&self) -> f64 {
        libm::sqrt(self.variance())
    }
}

impl Default for StatAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
