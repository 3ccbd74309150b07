//! Localized display strings with a guaranteed English fallback.
//!
//! Resolution is total: any locale identifier (including an empty or
//! unrecognized one) yields a complete bundle. A surprising host locale
//! never aborts the widget.

/// Display strings for one language.
///
/// Every registered bundle carries all four strings; a partial bundle is a
/// defect, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleBundle {
    pub title: &'static str,
    pub duration: &'static str,
    pub in_meeting: &'static str,
    pub not_in_meeting: &'static str,
}

const ZH_TW: LocaleBundle = LocaleBundle {
    title: "會議狀態",
    duration: "會議時長",
    in_meeting: "正在開會",
    not_in_meeting: "未開會",
};

const EN: LocaleBundle = LocaleBundle {
    title: "Meeting Status",
    duration: "Meeting Duration",
    in_meeting: "Busy",
    not_in_meeting: "Free",
};

/// Supported locales, exact-match keys.
const LOCALES: &[(&str, &LocaleBundle)] = &[("zh_TW", &ZH_TW), ("en", &EN)];

/// Resolve a locale identifier to its bundle, falling back to English.
pub fn bundle_for(identifier: &str) -> &'static LocaleBundle {
    LOCALES
        .iter()
        .find(|(key, _)| *key == identifier)
        .map(|(_, bundle)| *bundle)
        .unwrap_or(&EN)
}

/// Determine the host locale identifier.
///
/// An explicit override wins; otherwise `LC_ALL` then `LANG` are consulted,
/// the way the widget host would report its locale. The result is only ever
/// used as a lookup key, so an empty string is fine.
pub fn detect_locale(override_identifier: Option<&str>) -> String {
    if let Some(identifier) = override_identifier {
        return normalize_identifier(identifier);
    }

    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return normalize_identifier(&value);
            }
        }
    }

    String::new()
}

/// Reduce a POSIX-style locale string to a bare identifier:
/// `zh_TW.UTF-8` and `zh-TW` both become `zh_TW`.
fn normalize_identifier(raw: &str) -> String {
    let bare = raw.split(['.', '@']).next().unwrap_or(raw);
    bare.trim().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_locales() {
        assert_eq!(bundle_for("zh_TW").title, "會議狀態");
        assert_eq!(bundle_for("en").title, "Meeting Status");
    }

    #[test]
    fn falls_back_to_english() {
        for identifier in ["", "fr_FR", "zh", "zh_tw", "??", "en_US"] {
            assert_eq!(bundle_for(identifier), &EN, "identifier {identifier:?}");
        }
    }

    #[test]
    fn every_bundle_is_complete() {
        for (key, bundle) in LOCALES {
            assert!(!bundle.title.is_empty(), "title missing for {key}");
            assert!(!bundle.duration.is_empty(), "duration missing for {key}");
            assert!(!bundle.in_meeting.is_empty(), "in_meeting missing for {key}");
            assert!(
                !bundle.not_in_meeting.is_empty(),
                "not_in_meeting missing for {key}"
            );
        }
    }

    #[test]
    fn normalizes_posix_identifiers() {
        assert_eq!(normalize_identifier("zh_TW.UTF-8"), "zh_TW");
        assert_eq!(normalize_identifier("zh-TW"), "zh_TW");
        assert_eq!(normalize_identifier("en_US.utf8@euro"), "en_US");
        assert_eq!(normalize_identifier(" en "), "en");
    }

    #[test]
    fn override_beats_environment() {
        assert_eq!(detect_locale(Some("zh-TW.Big5")), "zh_TW");
    }
}
