//! Terminal rendering of a `ChartSeries`.
//!
//! Controllers only produce the series; anything able to draw labelled bars
//! can implement `ChartRenderer`.

use crate::errors::AppResult;
use crate::models::chart::ChartSeries;
use crate::utils::colors::{BLUE, GREY, RESET};
use crate::utils::formatting::{bold, pad_left, pad_right, truncate};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const MAX_LABEL_WIDTH: usize = 36;

/// Widest bar drawn, whatever the configuration asks for.
pub const MAX_CHART_WIDTH: usize = 200;

pub trait ChartRenderer {
    fn render(&self, series: &ChartSeries, out: &mut dyn Write) -> AppResult<()>;
}

/// Horizontal bar chart: one row per point, label on the left.
pub struct TerminalBarChart {
    /// Columns used by the longest bar.
    pub width: usize,
    pub color: bool,
}

impl TerminalBarChart {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.clamp(1, MAX_CHART_WIDTH),
            color: true,
        }
    }

    pub fn plain(width: usize) -> Self {
        Self {
            color: false,
            ..Self::new(width)
        }
    }

    fn bar(&self, value: f64, max: f64) -> String {
        let filled = if max <= 0.0 || value <= 0.0 {
            0
        } else {
            (((value / max) * self.width as f64).round() as usize).clamp(1, self.width)
        };
        let empty = self.width - filled;

        if self.color {
            format!(
                "{BLUE}{}{RESET}{GREY}{}{RESET}",
                "█".repeat(filled),
                "░".repeat(empty)
            )
        } else {
            format!("{}{}", "█".repeat(filled), "░".repeat(empty))
        }
    }
}

impl ChartRenderer for TerminalBarChart {
    fn render(&self, series: &ChartSeries, out: &mut dyn Write) -> AppResult<()> {
        let labels: Vec<String> = series
            .points
            .iter()
            .map(|p| truncate(&p.label, MAX_LABEL_WIDTH))
            .collect();
        let values: Vec<String> = series.points.iter().map(|p| format!("{:.2}", p.value)).collect();

        let label_w = labels
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);
        let value_w = values.iter().map(|v| v.len()).max().unwrap_or(0);
        let max = series.max_value();

        let title = if self.color {
            bold(&series.title)
        } else {
            series.title.clone()
        };
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", pad_left(&series.y_label, label_w + 3 + self.width))?;

        for ((label, value), point) in labels.iter().zip(&values).zip(&series.points) {
            writeln!(
                out,
                "{} │ {} {}",
                pad_right(label, label_w),
                self.bar(point.value, max),
                pad_left(value, value_w)
            )?;
        }

        Ok(())
    }
}
