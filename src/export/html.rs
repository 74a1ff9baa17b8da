//! Standalone document export orchestration

use log::info;

use crate::document::{render_standalone_document, resolve_access_token, StandaloneDocumentOptions};
use crate::state::saver;
use crate::state::AppState;
use crate::utils::filename::DEFAULT_DOCUMENT_FILE;

use super::errors::ExportResult;
use super::payload::{mime, NamedPayload};

/// Render application state into a standalone interactive document
///
/// Serializes the full map, overlays the access token (an explicit user
/// token wins over the fallback only when non-empty) and embeds the
/// requested interaction mode.
///
/// # Arguments
/// * `state` - Application state to embed
/// * `options` - Token overlay and mode options
///
/// # Returns
/// The HTML document payload under the default document file name
pub fn export_standalone_document_payload(
    state: &AppState,
    options: &StandaloneDocumentOptions,
) -> ExportResult<NamedPayload> {
    let document = saver::save(state);
    let token = resolve_access_token(options.user_token.as_deref(), &options.fallback_token);
    let html = render_standalone_document(&document, &token, options.mode)?;

    info!(
        "rendered standalone document: {} bytes, mode {}",
        html.len(),
        options.mode.as_str()
    );

    Ok(NamedPayload::new(
        DEFAULT_DOCUMENT_FILE,
        mime::HTML,
        html.into_bytes(),
    ))
}
