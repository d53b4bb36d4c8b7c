use std::fmt::Write as _;
use std::io::{self, Write};

use merge_insertion::{SortReport, Value, information_lower_bound, strategy_name};

#[derive(Clone, Copy, Debug)]
pub struct DisplayConfig {
    /// Sequences with at least this many values are truncated.
    pub truncate_at: usize,
    /// Values shown before the truncation marker.
    pub preview_len: usize,
    pub show_comparisons: bool,
}

pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {
    truncate_at: 15,
    preview_len: 4,
    show_comparisons: false,
};

impl DisplayConfig {
    pub fn untruncated(self) -> Self {
        Self {
            truncate_at: usize::MAX,
            ..self
        }
    }
}

pub fn format_values(label: &str, values: &[Value], config: &DisplayConfig) -> String {
    let mut line = format!("{label}:");
    let truncated = values.len() >= config.truncate_at;
    let shown = if truncated {
        &values[..config.preview_len.min(values.len())]
    } else {
        values
    };
    for value in shown {
        let _ = write!(line, " {value}");
    }
    if truncated {
        line.push_str(" [...]");
    }
    line
}

pub fn format_timing(report: &SortReport) -> String {
    format!(
        "Time to process a range of {} elements with {} : {:.3} us",
        report.input_len,
        strategy_name(report.strategy),
        report.elapsed_micros(),
    )
}

pub fn format_comparisons(report: &SortReport) -> String {
    format!(
        "Comparisons with {} : {} (lower bound {})",
        strategy_name(report.strategy),
        report.comparisons,
        information_lower_bound(report.input_len),
    )
}

/// Writes the before/after/timing block of every report, in order.
pub fn write_reports<W: Write>(
    out: &mut W,
    input: &[Value],
    reports: &[SortReport],
    config: &DisplayConfig,
) -> io::Result<()> {
    for report in reports {
        writeln!(out, "{}", format_values("Before", input, config))?;
        writeln!(out, "{}", format_values("After", &report.sorted, config))?;
        writeln!(out, "{}", format_timing(report))?;
        if config.show_comparisons {
            writeln!(out, "{}", format_comparisons(report))?;
        }
    }
    out.flush()
}
