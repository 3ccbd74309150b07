//! Immutable view-tree values handed to a rendering sink.
//!
//! The tree is plain data with no host types in it. A sink interprets the
//! semantic colors and styles with whatever primitives it has.

use chrono::{DateTime, Utc};

/// Semantic palette; sinks map these to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    DarkGray,
    Red,
    Green,
}

/// A color pair that adapts to the host's light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicColor {
    pub light: Color,
    pub dark: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: u32,
    pub weight: FontWeight,
    /// Allow the host to shrink long text down to this factor.
    pub min_scale: Option<f32>,
    /// None = host default text color.
    pub color: Option<Color>,
}

impl TextStyle {
    pub fn regular(size: u32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            min_scale: None,
            color: None,
        }
    }

    pub fn bold(size: u32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn scalable(mut self, min_scale: f32) -> Self {
        self.min_scale = Some(min_scale);
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Stack { axis: Axis, children: Vec<ViewNode> },
    Text { content: String, style: TextStyle },
    /// Named host symbol (e.g. a clock glyph), square, in points.
    Icon { symbol: String, size: u32 },
    Spacer,
}

/// The finished widget: one tree, one background, one refresh deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub background: DynamicColor,
    pub root: ViewNode,
    /// When the host should run the next refresh cycle.
    pub refresh_after: DateTime<Utc>,
}
