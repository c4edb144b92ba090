//! HTTP calls: the classifier and the optional report collaborator.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use intake::predict::check_status;
use intake::{
    Attachment, PREDICT_ENDPOINT, PREDICT_FILE_FIELD, PredictError, Prediction, Report,
    parse_prediction,
};
use reqwest::multipart::{Form, Part};

use crate::CliError;

/// Multipart part name carrying the optional report image.
const REPORT_IMAGE_FIELD: &str = "image";

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn file_part(file: &Attachment) -> Result<Part, reqwest::Error> {
    Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(file.effective_mime())
}

/// `POST {base_url}/predict` with `file` as the `file` part.
pub(crate) async fn predict(
    client: &reqwest::Client,
    base_url: &str,
    file: &Attachment,
) -> Result<Prediction, PredictError> {
    let url = endpoint_url(base_url, PREDICT_ENDPOINT);
    let part = file_part(file).map_err(|e| PredictError::Transport(e.to_string()))?;
    let form = Form::new().part(PREDICT_FILE_FIELD, part);

    tracing::debug!(%url, file = %file.file_name, bytes = file.bytes.len(), "sending prediction");
    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| PredictError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    tracing::debug!(status, "prediction response");
    check_status(status)?;
    let body = response
        .bytes()
        .await
        .map_err(|e| PredictError::Transport(e.to_string()))?;
    parse_prediction(&body)
}

/// Deliver a validated report to `url` as multipart form data.
pub(crate) async fn submit_report(
    client: &reqwest::Client,
    url: &str,
    report: &Report,
) -> Result<(), CliError> {
    let mut form = Form::new();
    for (name, value) in report.text_parts() {
        form = form.text(name, value);
    }
    if let Some(image) = &report.image {
        form = form.part(REPORT_IMAGE_FIELD, file_part(image)?);
    }

    let response = client.post(url).multipart(form).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::CollaboratorStatus(status.as_u16()));
    }
    Ok(())
}
