//! Read-only report over a stopwatch's final statistics.
//!
//! The stopwatch itself never prints; presentation lives here. A [`Report`]
//! is a plain snapshot of the accumulated statistics, cheap to take at any
//! point, serializable, and renderable either plain or colored. Passing a
//! reference report adds a relative line (this timer's total as a percentage
//! of the reference total), the usual way to express "section X is 40% of
//! the whole run".

use core::fmt;
use core::fmt::Write;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::clock::MonotonicClock;
use crate::stopwatch::PausableStopwatch;
use crate::units::{scaled, scaled_f64};

/// Snapshot of the statistics accumulated over completed sessions.
///
/// `min_ns`, `max_ns`, `mean_ns`, `variance_ns2`, and `stddev_ns` are zero
/// when `num_samples` is zero; the renderers report "no samples" in that
/// case rather than fabricating statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub num_samples: u64,
    pub total_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    pub mean_ns: f64,
    pub variance_ns2: f64,
    pub stddev_ns: f64,
}

impl Report {
    /// Snapshot the statistics of `stopwatch`.
    pub fn new<C: MonotonicClock>(stopwatch: &PausableStopwatch<C>) -> Self {
        if stopwatch.num_samples() == 0 {
            return Self {
                num_samples: 0,
                total_ns: 0,
                min_ns: 0,
                max_ns: 0,
                mean_ns: 0.0,
                variance_ns2: 0.0,
                stddev_ns: 0.0,
            };
        }
        Self {
            num_samples: stopwatch.num_samples(),
            total_ns: stopwatch.total_ns(),
            min_ns: stopwatch.min_ns(),
            max_ns: stopwatch.max_ns(),
            mean_ns: stopwatch.mean(),
            variance_ns2: stopwatch.variance(),
            stddev_ns: stopwatch.stddev(),
        }
    }

    /// This report's total as a percentage of `reference`'s total.
    ///
    /// Returns `None` when the reference total is zero.
    pub fn percent_of(&self, reference: &Report) -> Option<f64> {
        if reference.total_ns == 0 {
            return None;
        }
        Some(self.total_ns as f64 / reference.total_ns as f64 * 100.0)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report_plain(self, None))
    }
}

// ============================================================================
// Renderers
// ============================================================================

/// Format a report without colors.
pub fn format_report_plain(report: &Report, reference: Option<&Report>) -> String {
    let mut out = String::new();

    if report.num_samples == 0 {
        write!(out, "  no samples recorded").unwrap();
        return out;
    }

    let (total, total_unit) = scaled(report.total_ns);
    match reference.and_then(|r| report.percent_of(r)) {
        Some(pct) => {
            writeln!(out, "  total    {:.3} {} ({:.1}%)", total, total_unit, pct).unwrap()
        }
        None => writeln!(out, "  total    {:.3} {}", total, total_unit).unwrap(),
    }

    let (mean, mean_unit) = scaled_f64(report.mean_ns);
    writeln!(
        out,
        "  calls    {} ({:.3} {}/call)",
        report.num_samples, mean, mean_unit
    )
    .unwrap();

    let (min, min_unit) = scaled(report.min_ns);
    let (max, max_unit) = scaled(report.max_ns);
    writeln!(
        out,
        "  min/max  {:.3} {} / {:.3} {}",
        min, min_unit, max, max_unit
    )
    .unwrap();

    let (stddev, stddev_unit) = scaled_f64(report.stddev_ns);
    write!(out, "  stddev   {:.3} {}", stddev, stddev_unit).unwrap();

    out
}

/// Format a report with ANSI colors for terminal output.
///
/// Respects `NO_COLOR`/TTY detection through the `colored` crate.
pub fn format_report_colored(report: &Report, reference: Option<&Report>) -> String {
    let mut out = String::new();

    if report.num_samples == 0 {
        write!(out, "  {}", "no samples recorded".dimmed()).unwrap();
        return out;
    }

    let (total, total_unit) = scaled(report.total_ns);
    let total_str = format!("{:.3} {}", total, total_unit).bold();
    match reference.and_then(|r| report.percent_of(r)) {
        Some(pct) => writeln!(
            out,
            "  {}    {} ({})",
            "total".cyan(),
            total_str,
            format!("{:.1}%", pct).yellow()
        )
        .unwrap(),
        None => writeln!(out, "  {}    {}", "total".cyan(), total_str).unwrap(),
    }

    let (mean, mean_unit) = scaled_f64(report.mean_ns);
    writeln!(
        out,
        "  {}    {} ({:.3} {}/call)",
        "calls".cyan(),
        report.num_samples,
        mean,
        mean_unit
    )
    .unwrap();

    let (min, min_unit) = scaled(report.min_ns);
    let (max, max_unit) = scaled(report.max_ns);
    writeln!(
        out,
        "  {}  {:.3} {} / {:.3} {}",
        "min/max".cyan(),
        min,
        min_unit,
        max,
        max_unit
    )
    .unwrap();

    let (stddev, stddev_unit) = scaled_f64(report.stddev_ns);
    write!(
        out,
        "  {}   {:.3} {}",
        "stddev".cyan(),
        stddev,
        stddev_unit
    )
    .unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(total_ns: u64, num_samples: u64) -> Report {
        let mean = if num_samples > 0 {
            total_ns as f64 / num_samples as f64
        } else {
            0.0
        };
        Report {
            num_samples,
            total_ns,
            min_ns: 0,
            max_ns: total_ns,
            mean_ns: mean,
            variance_ns2: 0.0,
            stddev_ns: 0.0,
        }
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let r = report(0, 0);
        assert_eq!(format_report_plain(&r, None), "  no samples recorded");
    }

    #[test]
    fn plain_report_includes_all_lines() {
        let r = report(600, 3);
        let rendered = format_report_plain(&r, None);
        assert!(rendered.contains("total    600.000 ns"));
        assert!(rendered.contains("calls    3 (200.000 ns/call)"));
        assert!(rendered.contains("min/max"));
        assert!(rendered.contains("stddev"));
    }

    #[test]
    fn reference_adds_a_percentage() {
        let r = report(250, 1);
        let whole = report(1_000, 1);
        let rendered = format_report_plain(&r, Some(&whole));
        assert!(rendered.contains("(25.0%)"));
    }

    #[test]
    fn zero_total_reference_is_skipped() {
        let r = report(250, 1);
        let empty_ref = report(0, 0);
        assert_eq!(r.percent_of(&empty_ref), None);
        let rendered = format_report_plain(&r, Some(&empty_ref));
        assert!(!rendered.contains('%'));
    }

    #[test]
    fn display_matches_plain_renderer() {
        let r = report(1_500_000, 2);
        assert_eq!(r.to_string(), format_report_plain(&r, None));
    }
}
