use thiserror::Error;

/// Everything that can abort one refresh cycle.
///
/// All variants are fatal for the cycle they occur in: no partial rendering,
/// no cached fallback. The next scheduled cycle is the retry. Variants stay
/// distinct so diagnostics can tell a broken network from a broken upstream
/// contract.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Network failure or non-success status from the endpoint.
    #[error("status request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the JSON shape the endpoint promises.
    #[error("malformed status payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Payload decoded but carried no `data` field. Never defaulted; a
    /// synthesized value would misrepresent real-time meeting status.
    #[error("invalid response: missing data field")]
    InvalidResponse,

    /// The rendering sink could not accept the finished view.
    #[error("render sink failed: {0}")]
    Sink(#[from] std::io::Error),
}
