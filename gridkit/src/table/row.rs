use crate::measure::TextMeasure;
use crate::types::{Align, EdgeOverrides, OverflowPolicy, VAlign};

use super::cells::{CompoundCell, IconCell, StatusBadge};

/// A row of application data rendered by the grid.
///
/// # Example
///
/// ```ignore
/// struct Volunteer {
///     name: String,
///     email: String,
/// }
///
/// impl TableRow for Volunteer {
///     fn cell(&self, column_id: &str) -> CellContent {
///         match column_id {
///             "name" => CellContent::text(&self.name),
///             "email" => CellContent::text(&self.email),
///             _ => CellContent::Empty,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Content for the given column.
    fn cell(&self, column_id: &str) -> CellContent;

    /// Per-cell presentation override. Set properties win over the column
    /// defaults property by property.
    fn spec(&self, _column_id: &str) -> Option<CellSpec> {
        None
    }
}

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Text(String),
    Badge(StatusBadge),
    Icon(IconCell),
    Compound(CompoundCell),
}

impl CellContent {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Width this content wants, before padding.
    pub fn measure_width(&self, measure: &dyn TextMeasure) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Text(s) => measure.width(s),
            Self::Badge(b) => measure.width(&b.display_text()),
            Self::Icon(i) => measure.width(&i.display_text()),
            Self::Compound(c) => measure.width(&c.primary).max(measure.width(&c.secondary)),
        }
    }

    /// Plain text, when the content is plain text. Tooltip fallback uses
    /// this; anything richer needs an explicit override.
    pub fn as_plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A column definition: identity plus presentation defaults for its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub header: String,
    pub align: Align,
    pub v_align: VAlign,
    pub overflow: OverflowPolicy,
    pub border: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            align: Align::default(),
            v_align: VAlign::default(),
            overflow: OverflowPolicy::default(),
            border: true,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn v_align(mut self, v_align: VAlign) -> Self {
        self.v_align = v_align;
        self
    }

    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn no_border(mut self) -> Self {
        self.border = false;
        self
    }
}

/// Per-cell presentation override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellSpec {
    pub align: Option<Align>,
    pub v_align: Option<VAlign>,
    pub overflow: Option<OverflowPolicy>,
    pub border: Option<bool>,
    pub padding: EdgeOverrides,
    /// Explicit tooltip content; wins over the cell's own text.
    pub tooltip: Option<String>,
}

impl CellSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn v_align(mut self, v_align: VAlign) -> Self {
        self.v_align = Some(v_align);
        self
    }

    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = Some(border);
        self
    }

    pub fn padding(mut self, padding: EdgeOverrides) -> Self {
        self.padding = padding;
        self
    }

    pub fn tooltip(mut self, content: impl Into<String>) -> Self {
        self.tooltip = Some(content.into());
        self
    }
}
