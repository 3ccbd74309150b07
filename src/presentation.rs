//! Mapping from validated payload to a display-ready summary.

use crate::i18n::LocaleBundle;
use crate::status::MeetingData;

/// Semantic color of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// In a meeting, rendered with the alert color.
    Alert,
    /// Free, rendered with the ok color.
    Ok,
}

/// Fully localized summary of one refresh cycle.
///
/// Constructed fresh from payload + bundle, consumed once by the view
/// builder, then discarded; nothing here outlives the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    pub title: String,
    pub status_label: String,
    pub tone: StatusTone,
    pub duration_caption: String,
    pub duration_text: String,
}

/// Pure, total mapping: already-validated data in, presentation out.
pub fn present(data: &MeetingData, bundle: &LocaleBundle) -> PresentationState {
    let (status_label, tone) = if data.in_meeting {
        (bundle.in_meeting, StatusTone::Alert)
    } else {
        (bundle.not_in_meeting, StatusTone::Ok)
    };

    PresentationState {
        title: bundle.title.to_string(),
        status_label: status_label.to_string(),
        tone,
        duration_caption: bundle.duration.to_string(),
        duration_text: data.meeting_duration.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle_for;
    use crate::status::DurationText;

    fn data(in_meeting: bool, duration: &str) -> MeetingData {
        MeetingData {
            user: None,
            user_icon_url: None,
            in_meeting,
            meeting_duration: DurationText::Text(duration.to_string()),
        }
    }

    #[test]
    fn busy_maps_to_alert() {
        let state = present(&data(true, "1h 20m"), bundle_for("en"));
        assert_eq!(state.status_label, "Busy");
        assert_eq!(state.tone, StatusTone::Alert);
        assert_eq!(state.duration_text, "1h 20m");
    }

    #[test]
    fn free_maps_to_ok_in_every_bundle() {
        for locale in ["en", "zh_TW", "unrecognized"] {
            let bundle = bundle_for(locale);
            let state = present(&data(false, "0m"), bundle);
            assert_eq!(state.status_label, bundle.not_in_meeting);
            assert_eq!(state.tone, StatusTone::Ok);
        }
    }

    #[test]
    fn traditional_chinese_labels() {
        let state = present(&data(false, "0m"), bundle_for("zh_TW"));
        assert_eq!(state.title, "會議狀態");
        assert_eq!(state.status_label, "未開會");
        assert_eq!(state.duration_caption, "會議時長");
    }

    #[test]
    fn mapping_is_deterministic() {
        let payload = data(true, "00:42:00");
        let bundle = bundle_for("en");
        assert_eq!(present(&payload, bundle), present(&payload, bundle));
    }
}
