//! In-memory file attachments and their preview encoding.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Reading a picked file into memory failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to read file: {0}")]
pub struct DecodeError(pub String);

/// A user-picked file held in memory.
///
/// No type or size validation happens here; the picker's `accept` filter is
/// the only gate.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Mime type to send and embed, falling back to a generic binary type.
    #[must_use]
    pub fn effective_mime(&self) -> &str {
        let trimmed = self.mime_type.trim();
        if trimmed.is_empty() { FALLBACK_MIME } else { trimmed }
    }

    /// Render the attachment as a `data:` URI usable as an image source.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.effective_mime(), STANDARD.encode(&self.bytes))
    }
}

// Bytes are elided; attachments can be megabytes.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Guess an image mime type from a file name extension.
///
/// Used where no picker supplies a type (CLI paths).
#[must_use]
pub fn guess_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => FALLBACK_MIME,
    }
}
