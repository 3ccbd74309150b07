//! One end-to-end refresh cycle: fetch and validate the status, map it to a
//! localized presentation, build the view, hand it to the sink.
//!
//! The fetch await is the only suspension point; everything else is
//! in-memory. A cycle has exactly one failure exit (before anything is
//! rendered) and one success exit (the view handed to the sink with its
//! refresh deadline).

use chrono::{Duration, Utc};
use log::debug;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::i18n::LocaleBundle;
use crate::presentation::present;
use crate::render::RenderSink;
use crate::status::StatusFetcher;
use crate::view::{build_view, WidgetView};

pub async fn run_cycle(
    fetcher: &StatusFetcher,
    bundle: &'static LocaleBundle,
    config: &WidgetConfig,
    sink: &mut dyn RenderSink,
) -> Result<WidgetView, WidgetError> {
    let data = fetcher.fetch().await?;
    debug!("in_meeting={}", data.in_meeting);

    let state = present(&data, bundle);
    let refresh_after = Utc::now() + Duration::seconds(config.refresh_interval_secs as i64);
    let view = build_view(&state, refresh_after);

    sink.present(&view)?;
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle_for;
    use crate::status::fetcher::parse_status;

    // The network-free spine of the cycle: decode, validate, map, build.
    fn spine(body: &str, locale: &str) -> Result<WidgetView, WidgetError> {
        let data = parse_status(body)?;
        let state = present(&data, bundle_for(locale));
        Ok(build_view(&state, Utc::now()))
    }

    #[test]
    fn busy_payload_renders_the_english_busy_view() {
        let view =
            spine(r#"{"data":{"in_meeting":true,"meeting_duration":"1h 20m"}}"#, "en").unwrap();
        let lines = crate::render::terminal::render_lines(&view);
        assert!(lines.iter().any(|line| line.contains("Busy")));
        assert!(lines.iter().any(|line| line.contains("1h 20m")));
    }

    #[test]
    fn empty_payload_produces_no_view() {
        let err = spine("{}", "en").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidResponse));
    }

    #[test]
    fn identical_input_yields_identical_presentation() {
        let body = r#"{"data":{"in_meeting":false,"meeting_duration":"0m"}}"#;
        let first = present(&parse_status(body).unwrap(), bundle_for("zh_TW"));
        let second = present(&parse_status(body).unwrap(), bundle_for("zh_TW"));
        assert_eq!(first, second);
    }
}
