//! Terminal stand-in for the widget surface.
//!
//! Flattening the tree into lines is pure; only the final write touches
//! stdout.

use std::io::{self, Write};

use log::info;

use crate::error::WidgetError;
use crate::view::{Axis, Color, FontWeight, ViewNode, WidgetView};

use super::RenderSink;

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

fn ansi_color(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::White => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
    }
}

fn styled(content: &str, weight: FontWeight, color: Option<Color>) -> String {
    let mut prefix = String::new();
    if weight == FontWeight::Bold {
        prefix.push_str(ANSI_BOLD);
    }
    if let Some(color) = color {
        prefix.push_str(ansi_color(color));
    }
    if prefix.is_empty() {
        content.to_string()
    } else {
        format!("{prefix}{content}{ANSI_RESET}")
    }
}

/// Glyph stand-ins for host symbols.
fn symbol_glyph(symbol: &str) -> &'static str {
    match symbol {
        "clock.badge" => "◷",
        _ => "□",
    }
}

fn flatten(node: &ViewNode, lines: &mut Vec<String>) {
    match node {
        ViewNode::Stack {
            axis: Axis::Vertical,
            children,
        } => {
            for child in children {
                flatten(child, lines);
            }
        }
        ViewNode::Stack {
            axis: Axis::Horizontal,
            children,
        } => {
            let mut parts = Vec::new();
            for child in children {
                match child {
                    ViewNode::Text { content, style } => {
                        parts.push(styled(content, style.weight, style.color));
                    }
                    ViewNode::Icon { symbol, .. } => parts.push(symbol_glyph(symbol).to_string()),
                    ViewNode::Spacer => parts.push("   ".to_string()),
                    nested => flatten(nested, lines),
                }
            }
            lines.push(parts.join(" "));
        }
        ViewNode::Text { content, style } => {
            lines.push(styled(content, style.weight, style.color));
        }
        ViewNode::Icon { symbol, .. } => lines.push(symbol_glyph(symbol).to_string()),
        ViewNode::Spacer => lines.push(String::new()),
    }
}

/// Flatten a widget view into the lines the terminal will show.
pub fn render_lines(view: &WidgetView) -> Vec<String> {
    let mut lines = Vec::new();
    flatten(&view.root, &mut lines);
    lines
}

/// Writes each rendered view to stdout, replacing nothing: like the widget
/// host, a failed cycle simply leaves the previous output on screen.
pub struct TerminalSink {
    out: io::Stdout,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalSink {
    fn present(&mut self, view: &WidgetView) -> Result<(), WidgetError> {
        let mut handle = self.out.lock();
        for line in render_lines(view) {
            writeln!(handle, "{line}")?;
        }
        writeln!(handle)?;
        handle.flush()?;
        info!("widget rendered; next refresh at {}", view.refresh_after);
        Ok(())
    }
}
