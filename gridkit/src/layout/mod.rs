mod frozen;
mod rect;
mod width;

pub use frozen::FrozenColumns;
pub use rect::Rect;
pub use width::{
    FixedPercentage, GridFraction, IntrinsicSizing, Measured, WidthPlan, WidthStrategy,
};
