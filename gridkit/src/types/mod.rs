mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, Rgb};
pub use edges::{EdgeOverrides, Edges};
pub use enums::{Align, Border, Density, OverflowPolicy, TextStyle, VAlign};
pub use style::Style;
pub use theme::{BadgeTone, Theme};
