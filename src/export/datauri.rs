//! Data URI parsing and encoding
//!
//! A data URI carries binary content inline as `data:<mime>;base64,<payload>`.
//! The parser here follows that grammar exactly and fails loudly on any
//! missing delimiter or invalid base64, rather than producing a garbage
//! MIME string or truncated bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::{ExportError, ExportResult};

/// Decoded content of a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUriPayload {
    /// MIME type recovered from the URI header
    pub mime_type: String,
    /// Decoded payload bytes
    pub bytes: Vec<u8>,
}

/// Parse a `data:<mime>;base64,<payload>` URI into its MIME type and raw bytes
///
/// # Arguments
/// * `uri` - The data URI string to decode
///
/// # Returns
/// The decoded payload, or an error describing which part of the grammar
/// the input violates
pub fn parse_data_uri(uri: &str) -> ExportResult<DataUriPayload> {
    let (header, payload) = uri.split_once(',').ok_or_else(|| {
        ExportError::MalformedDataUri(format!("missing ',' separator in '{}'", preview(uri)))
    })?;

    let mime_and_encoding = header.strip_prefix("data:").ok_or_else(|| {
        ExportError::MalformedDataUri(format!("missing 'data:' prefix in '{}'", preview(uri)))
    })?;

    let (mime_type, encoding) = mime_and_encoding.split_once(';').ok_or_else(|| {
        ExportError::MalformedDataUri(format!("missing ';' after MIME type in '{}'", preview(uri)))
    })?;

    if mime_type.is_empty() {
        return Err(ExportError::MalformedDataUri(format!(
            "empty MIME type in '{}'",
            preview(uri)
        )));
    }

    if encoding != "base64" {
        return Err(ExportError::MalformedDataUri(format!(
            "unsupported encoding '{}', expected 'base64'",
            encoding
        )));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::InvalidBase64(e.to_string()))?;

    Ok(DataUriPayload {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// Encode bytes as a `data:<mime>;base64,<payload>` URI
///
/// Inverse of [`parse_data_uri`]; used for thumbnail embedding and tests.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Shorten a URI for inclusion in an error message
fn preview(uri: &str) -> String {
    const MAX: usize = 48;
    if uri.len() <= MAX {
        uri.to_string()
    } else {
        let cut = uri
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &uri[..cut])
    }
}
