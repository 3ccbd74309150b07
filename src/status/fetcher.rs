//! One status fetch per refresh cycle.

use log::debug;

use crate::config::WidgetConfig;
use crate::error::WidgetError;

use super::model::{MeetingData, StatusResponse};

/// Issues the single GET of a refresh cycle and validates the payload.
///
/// One attempt per cycle, unauthenticated; a failed attempt aborts the cycle
/// and the next scheduled cycle tries again. Timeouts are left to the
/// transport's defaults.
pub struct StatusFetcher {
    client: reqwest::Client,
    url: String,
}

impl StatusFetcher {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.status_url(),
        }
    }

    pub async fn fetch(&self) -> Result<MeetingData, WidgetError> {
        debug!("requesting {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_status(&body)
    }
}

/// Decode a response body and require the `data` field.
pub fn parse_status(body: &str) -> Result<MeetingData, WidgetError> {
    let response: StatusResponse = serde_json::from_str(body)?;
    response.data.ok_or(WidgetError::InvalidResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_payload() {
        let data =
            parse_status(r#"{"data":{"in_meeting":true,"meeting_duration":"1h 20m"}}"#).unwrap();
        assert!(data.in_meeting);
        assert_eq!(data.meeting_duration.to_string(), "1h 20m");
    }

    #[test]
    fn missing_data_is_a_validation_failure() {
        let err = parse_status("{}").unwrap_err();
        assert!(matches!(err, WidgetError::InvalidResponse));
    }

    #[test]
    fn malformed_body_is_a_decode_failure() {
        let err = parse_status("not json").unwrap_err();
        assert!(matches!(err, WidgetError::Decode(_)));

        // Wrong inner shape is also a decode failure, not a silent default.
        let err = parse_status(r#"{"data":{"in_meeting":"maybe"}}"#).unwrap_err();
        assert!(matches!(err, WidgetError::Decode(_)));
    }

    #[test]
    fn failure_kinds_stay_distinguishable() {
        let validation = parse_status("{}").unwrap_err().to_string();
        let decode = parse_status("[]").unwrap_err().to_string();
        assert_ne!(validation, decode);
        assert!(validation.contains("missing data"));
    }
}
