//! Content measurement - the probe that sizes the pinned column.
//!
//! The measurement capability is a trait so the resolver never touches the
//! render target directly; the default implementation is unicode-width
//! display cells.

use crate::table::{Column, TableRow};
use crate::text::display_width;
use crate::types::Edges;

/// Per-column maximum content widths, including cell padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMetrics {
    column_max: Vec<u16>,
}

impl ContentMetrics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_columns(column_max: Vec<u16>) -> Self {
        Self { column_max }
    }

    /// Widest measured cell of the pinned (first) column. Zero when nothing
    /// was measured.
    pub fn pinned_max(&self) -> u16 {
        self.column_max.first().copied().unwrap_or(0)
    }

    pub fn column_max(&self) -> &[u16] {
        &self.column_max
    }
}

/// Measures rendered text width in display cells.
pub trait TextMeasure {
    fn width(&self, text: &str) -> u16;
}

/// Default measurement backed by unicode-width.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeMeasure;

impl TextMeasure for UnicodeMeasure {
    fn width(&self, text: &str) -> u16 {
        display_width(text).min(u16::MAX as usize) as u16
    }
}

/// Measure headers and row cells for every column.
///
/// Rows may be empty; the strategies fall back to their minimum widths in
/// that case. Padding is added per cell the way the probe inherited the
/// cell's font in the measurement pass.
pub fn collect_metrics<R: TableRow>(
    columns: &[Column],
    rows: &[R],
    padding: Edges,
    measure: &dyn TextMeasure,
) -> ContentMetrics {
    let pad = padding.horizontal_total();
    let mut column_max: Vec<u16> = columns
        .iter()
        .map(|col| measure.width(&col.header).saturating_add(pad))
        .collect();

    for row in rows {
        for (index, col) in columns.iter().enumerate() {
            let width = row.cell(&col.id).measure_width(measure).saturating_add(pad);
            if width > column_max[index] {
                column_max[index] = width;
            }
        }
    }

    ContentMetrics::from_columns(column_max)
}
