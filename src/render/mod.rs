//! Rendering sinks: where a finished widget view leaves the pipeline.

pub mod terminal;

pub use terminal::TerminalSink;

use crate::error::WidgetError;
use crate::view::WidgetView;

/// Host surface that accepts one finished view per refresh cycle.
///
/// Presenting is the pipeline's only side effect; everything before it is
/// pure. The sink also receives the view's refresh deadline and is expected
/// to honor it when scheduling the next cycle.
pub trait RenderSink {
    fn present(&mut self, view: &WidgetView) -> Result<(), WidgetError>;
}
