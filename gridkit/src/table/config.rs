use crate::layout::WidthStrategy;
use crate::types::{Border, Density};

/// Shell configuration, constructed once per table and passed explicitly to
/// every render function. Immutable for the duration of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Cap on the viewport height. `None` fills the given area.
    pub max_height: Option<u16>,
    /// Column indices to pin at the left edge. Normalized to the longest
    /// leading prefix at plan time.
    pub frozen_columns: Vec<usize>,
    pub density: Density,
    pub strategy: WidthStrategy,
    /// When set, every row carries the stripe marker; the tint lands on
    /// even visual positions at paint time.
    pub striping: bool,
    pub hover: bool,
    pub sticky_header: bool,
    pub border: Border,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_height: None,
            frozen_columns: Vec::new(),
            density: Density::default(),
            strategy: WidthStrategy::default(),
            striping: true,
            hover: true,
            sticky_header: true,
            border: Border::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_height(mut self, height: u16) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn frozen_columns(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.frozen_columns = indices.into();
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn strategy(mut self, strategy: WidthStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn striping(mut self, striping: bool) -> Self {
        self.striping = striping;
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    pub fn sticky_header(mut self, sticky: bool) -> Self {
        self.sticky_header = sticky;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}
