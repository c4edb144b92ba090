//! Wire contract for the remote image classifier.
//!
//! `POST /predict` takes a single multipart part named `file` and answers a
//! 2xx JSON body carrying a `label`. Any other fields (the classifier also
//! returns `confidence` and `steps`) are ignored. Non-2xx bodies are never
//! parsed.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use serde::Deserialize;

/// Fixed relative endpoint of the classifier.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Multipart field name carrying the image bytes.
pub const PREDICT_FILE_FIELD: &str = "file";

/// Why a prediction request did not produce a label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The server answered with a non-2xx status.
    #[error("server error (HTTP {0})")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The 2xx body was not the expected JSON object.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The 2xx body parsed but carried no `label`.
    #[error("response did not include a label")]
    MissingLabel,
}

/// A successful classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prediction {
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    label: Option<String>,
}

/// Map an HTTP status onto the success/failure split of the contract.
///
/// # Errors
///
/// Returns [`PredictError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), PredictError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(PredictError::Status(status))
    }
}

/// Parse a 2xx response body into a [`Prediction`].
///
/// The label is taken verbatim. A body without a string `label` is a
/// malformed response and is reported as a failure rather than rendered
/// empty.
///
/// # Errors
///
/// Returns [`PredictError::Decode`] when the body is not a JSON object with
/// an optional string `label`, and [`PredictError::MissingLabel`] when the
/// field is absent or null.
pub fn parse_prediction(body: &[u8]) -> Result<Prediction, PredictError> {
    let response: PredictResponse =
        serde_json::from_slice(body).map_err(|e| PredictError::Decode(e.to_string()))?;
    let label = response.label.ok_or(PredictError::MissingLabel)?;
    Ok(Prediction { label })
}
