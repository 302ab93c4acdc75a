//! Frozen-column bookkeeping.
//!
//! Frozen columns only make sense as a prefix of the column order: the
//! left-offset of a frozen column is the sum of the widths of the frozen
//! columns before it. A configured set like `[0, 2]` is normalized down to
//! its longest valid prefix (`[0]`) with a warning, instead of silently
//! rendering overlapping sticky cells.

use log::warn;

use super::WidthPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrozenColumns {
    prefix_len: usize,
}

impl FrozenColumns {
    /// Normalize configured indices against the actual column count.
    ///
    /// Indices at or past `column_count` are harmless no-ops; indices that
    /// break the prefix are dropped with a warning.
    pub fn normalize(indices: &[usize], column_count: usize) -> Self {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < column_count)
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut prefix_len = 0;
        for (position, &index) in sorted.iter().enumerate() {
            if index == position {
                prefix_len = position + 1;
            } else {
                warn!(
                    "frozen column {index} is not part of the leading prefix; ignoring it \
                     and {} more",
                    sorted.len() - position - 1
                );
                break;
            }
        }

        Self { prefix_len }
    }

    pub fn len(&self) -> usize {
        self.prefix_len
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_len == 0
    }

    pub fn contains(&self, column: usize) -> bool {
        column < self.prefix_len
    }

    /// Pin offset for `column`: the summed widths of the frozen columns
    /// before it. `None` for columns that are not frozen.
    pub fn offset(&self, plan: &WidthPlan, column: usize) -> Option<u16> {
        if !self.contains(column) {
            return None;
        }
        let offset = (0..column).map(|i| plan.width(i) as u32).sum::<u32>();
        Some(offset.min(u16::MAX as u32) as u16)
    }

    /// Total width of the frozen band.
    pub fn band_width(&self, plan: &WidthPlan) -> u16 {
        let total = (0..self.prefix_len)
            .map(|i| plan.width(i) as u32)
            .sum::<u32>();
        total.min(u16::MAX as u32) as u16
    }
}
