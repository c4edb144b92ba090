//! Loading images from disk.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::path::Path;

use intake::{Attachment, guess_mime};

use crate::CliError;

/// Read `path` into an attachment, guessing the mime type from its extension.
pub(crate) fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = guess_mime(&file_name);
    tracing::debug!(file = %file_name, bytes = bytes.len(), mime, "read attachment");
    Ok(Attachment::new(file_name, mime, bytes))
}
