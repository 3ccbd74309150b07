//! Pure construction of the widget view from one cycle's presentation state.

use chrono::{DateTime, Utc};

use crate::presentation::{PresentationState, StatusTone};

use super::tree::{Axis, Color, DynamicColor, TextStyle, ViewNode, WidgetView};

/// Host symbol shown next to the title.
const CLOCK_SYMBOL: &str = "clock.badge";
const CLOCK_SYMBOL_SIZE: u32 = 16;

const TITLE_SIZE: u32 = 12;
const STATUS_SIZE: u32 = 64;
const CAPTION_SIZE: u32 = 10;
const DURATION_SIZE: u32 = 16;

/// Long labels may shrink to half size before truncating.
const MIN_SCALE: f32 = 0.5;

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Alert => Color::Red,
        StatusTone::Ok => Color::Green,
    }
}

/// Build the widget tree: header row (title + clock icon), the prominent
/// tone-colored status line, and the duration footer.
pub fn build_view(state: &PresentationState, refresh_after: DateTime<Utc>) -> WidgetView {
    let header = ViewNode::Stack {
        axis: Axis::Horizontal,
        children: vec![
            ViewNode::Text {
                content: state.title.clone(),
                style: TextStyle::regular(TITLE_SIZE),
            },
            ViewNode::Spacer,
            ViewNode::Icon {
                symbol: CLOCK_SYMBOL.to_string(),
                size: CLOCK_SYMBOL_SIZE,
            },
        ],
    };

    let status_line = ViewNode::Stack {
        axis: Axis::Horizontal,
        children: vec![ViewNode::Text {
            content: state.status_label.clone(),
            style: TextStyle::bold(STATUS_SIZE)
                .scalable(MIN_SCALE)
                .colored(tone_color(state.tone)),
        }],
    };

    let root = ViewNode::Stack {
        axis: Axis::Vertical,
        children: vec![
            header,
            ViewNode::Spacer,
            status_line,
            ViewNode::Spacer,
            ViewNode::Text {
                content: state.duration_caption.clone(),
                style: TextStyle::regular(CAPTION_SIZE),
            },
            ViewNode::Text {
                content: state.duration_text.clone(),
                style: TextStyle::regular(DURATION_SIZE).scalable(MIN_SCALE),
            },
        ],
    };

    WidgetView {
        background: DynamicColor {
            light: Color::White,
            dark: Color::DarkGray,
        },
        root,
        refresh_after,
    }
}
