pub mod buffer;
pub mod event;
pub mod layout;
pub mod measure;
pub mod scroll;
pub mod table;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use event::{from_crossterm, Event, Key};
pub use layout::{
    FixedPercentage, FrozenColumns, GridFraction, IntrinsicSizing, Measured, Rect, WidthPlan,
    WidthStrategy,
};
pub use measure::{collect_metrics, ContentMetrics, TextMeasure, UnicodeMeasure};
pub use scroll::{ScrollRequest, ScrollState};
pub use table::{
    CellContent, CellHit, CellRef, CellSpec, Column, CompoundCell, DataTable, IconCell, RowHit,
    StatusBadge, TableConfig, TableRow, TableState, TooltipPhase, TooltipState,
    TOOLTIP_PLACEHOLDER,
};
pub use terminal::Terminal;
pub use types::*;
