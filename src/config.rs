use std::time::Duration;

/// Fixed configuration for the widget.
///
/// The endpoint, monitored user, and refresh interval are part of the
/// widget's identity; only the locale comes from outside.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Base URL of the meeting-presence endpoint
    pub endpoint: String,

    /// Identifier of the monitored user, sent as the `user` query parameter
    pub user: String,

    /// Seconds until the host should run the next refresh cycle
    pub refresh_interval_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://tsmb.fawenyo.pp.ua/api/monitor/teams".to_string(),
            user: "FawenYo".to_string(),
            refresh_interval_secs: 30,
        }
    }
}

impl WidgetConfig {
    /// Full status URL for one fetch.
    pub fn status_url(&self) -> String {
        format!("{}?user={}", self.endpoint, self.user)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
