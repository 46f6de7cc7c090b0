//! Time-unit conversions for presenting nanosecond measurements.
//!
//! Pure scalar division; no state, no error cases. The report renderer uses
//! [`scaled`] to pick a readable unit, downstream code can use the individual
//! conversions directly.

/// Nanoseconds per microsecond.
pub const NS_PER_US: f64 = 1e3;
/// Nanoseconds per millisecond.
pub const NS_PER_MS: f64 = 1e6;
/// Nanoseconds per second.
pub const NS_PER_SEC: f64 = 1e9;
/// Nanoseconds per minute.
pub const NS_PER_MIN: f64 = 60.0 * NS_PER_SEC;
/// Nanoseconds per hour.
pub const NS_PER_HOUR: f64 = 3600.0 * NS_PER_SEC;

/// Convert nanoseconds to microseconds.
#[inline]
pub fn ns_to_us(ns: u64) -> f64 {
    ns as f64 / NS_PER_US
}

/// Convert nanoseconds to milliseconds.
#[inline]
pub fn ns_to_ms(ns: u64) -> f64 {
    ns as f64 / NS_PER_MS
}

/// Convert nanoseconds to seconds.
#[inline]
pub fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / NS_PER_SEC
}

/// Convert nanoseconds to minutes.
#[inline]
pub fn ns_to_mins(ns: u64) -> f64 {
    ns as f64 / NS_PER_MIN
}

/// Convert nanoseconds to hours.
#[inline]
pub fn ns_to_hours(ns: u64) -> f64 {
    ns as f64 / NS_PER_HOUR
}

/// Scale a nanosecond value to the largest unit in which it is at least 1.
///
/// Returns the scaled value and the unit suffix.
///
/// # Examples
/// ```
/// assert_eq!(stopstat::units::scaled(1_500), (1.5, "us"));
/// assert_eq!(stopstat::units::scaled(950), (950.0, "ns"));
/// ```
pub fn scaled(ns: u64) -> (f64, &'static str) {
    let ns_f = ns as f64;
    if ns_f >= NS_PER_HOUR {
        (ns_f / NS_PER_HOUR, "h")
    } else if ns_f >= NS_PER_MIN {
        (ns_f / NS_PER_MIN, "min")
    } else if ns_f >= NS_PER_SEC {
        (ns_f / NS_PER_SEC, "s")
    } else if ns_f >= NS_PER_MS {
        (ns_f / NS_PER_MS, "ms")
    } else if ns_f >= NS_PER_US {
        (ns_f / NS_PER_US, "us")
    } else {
        (ns_f, "ns")
    }
}

/// Like [`scaled`] but for an already-floating nanosecond value (means,
/// standard deviations).
pub fn scaled_f64(ns: f64) -> (f64, &'static str) {
    if ns >= NS_PER_HOUR {
        (ns / NS_PER_HOUR, "h")
    } else if ns >= NS_PER_MIN {
        (ns / NS_PER_MIN, "min")
    } else if ns >= NS_PER_SEC {
        (ns / NS_PER_SEC, "s")
    } else if ns >= NS_PER_MS {
        (ns / NS_PER_MS, "ms")
    } else if ns >= NS_PER_US {
        (ns / NS_PER_US, "us")
    } else {
        (ns, "ns")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_plain_division() {
        assert_eq!(ns_to_us(1_500), 1.5);
        assert_eq!(ns_to_ms(2_000_000), 2.0);
        assert_eq!(ns_to_secs(3_000_000_000), 3.0);
        assert_eq!(ns_to_mins(90_000_000_000), 1.5);
        assert_eq!(ns_to_hours(7_200_000_000_000), 2.0);
    }

    #[test]
    fn scaled_picks_the_largest_fitting_unit() {
        assert_eq!(scaled(0), (0.0, "ns"));
        assert_eq!(scaled(999), (999.0, "ns"));
        assert_eq!(scaled(1_000), (1.0, "us"));
        assert_eq!(scaled(1_000_000), (1.0, "ms"));
        assert_eq!(scaled(1_000_000_000), (1.0, "s"));
        assert_eq!(scaled(60_000_000_000), (1.0, "min"));
        assert_eq!(scaled(3_600_000_000_000), (1.0, "h"));
    }

    #[test]
    fn scaled_f64_matches_scaled_on_integers() {
        for ns in [0u64, 500, 1_500, 2_500_000, 4_000_000_000] {
            let (v, u) = scaled(ns);
            let (vf, uf) = scaled_f64(ns as f64);
            assert_eq!(u, uf);
            assert_eq!(v, vf);
        }
    }
}
