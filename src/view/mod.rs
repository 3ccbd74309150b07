pub mod build;
pub mod tree;

pub use build::build_view;
pub use tree::{Axis, Color, DynamicColor, FontWeight, TextStyle, ViewNode, WidgetView};
