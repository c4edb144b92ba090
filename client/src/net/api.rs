//! REST helper for the image classifier.
//!
//! Client-side (csr): a real multipart request via `gloo-net`.
//! Native builds (tests): a stub that reports a transport failure, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every exit path returns a `Result`, so the caller can always settle the
//! upload session and restore the trigger.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use intake::{PredictError, Prediction};

use crate::util::file::PickedFile;

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "prediction requires a browser";

/// File name sent with the multipart part; browsers require a non-empty one.
#[cfg(any(test, feature = "csr"))]
fn part_file_name(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() { "upload" } else { name }
}

/// Send `file` to `POST /predict` and parse the returned label.
///
/// # Errors
///
/// [`PredictError::Transport`] when the request cannot be built or sent,
/// [`PredictError::Status`] for a non-2xx answer, and the parse errors of
/// [`intake::parse_prediction`] for a malformed body.
pub async fn predict(file: &PickedFile) -> Result<Prediction, PredictError> {
    #[cfg(feature = "csr")]
    {
        let form = multipart_body(file).map_err(PredictError::Transport)?;
        let resp = gloo_net::http::Request::post(intake::PREDICT_ENDPOINT)
            .body(form)
            .map_err(|e| PredictError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        intake::predict::check_status(resp.status())?;
        let body = resp
            .binary()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        intake::parse_prediction(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = file;
        Err(PredictError::Transport(UNAVAILABLE.to_owned()))
    }
}

#[cfg(feature = "csr")]
fn multipart_body(file: &PickedFile) -> Result<web_sys::FormData, String> {
    use crate::util::file::js_error;

    let PickedFile(file) = file;
    let name = file.name();
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(intake::PREDICT_FILE_FIELD, file, part_file_name(&name))
        .map_err(js_error)?;
    Ok(form)
}
