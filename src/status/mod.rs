pub mod fetcher;
pub mod model;

pub use fetcher::StatusFetcher;
pub use model::{DurationText, MeetingData, StatusResponse};
