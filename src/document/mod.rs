//! Standalone interactive document rendering
//!
//! Renders a saved map document into a single self-contained HTML page
//! that bootstraps the map viewer from embedded state. The access token
//! for the base-map provider and the document mode are embedded alongside
//! the serialized map.

use std::fmt::Write as _;

use crate::export::errors::ExportResult;
use crate::state::SavedMapDocument;

/// Rate-limited public token embedded when no override is supplied
pub const PUBLIC_ACCESS_TOKEN: &str = "pk.cartokit-public";

/// Interaction mode embedded into a standalone document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMode {
    /// Viewer cannot change the map
    Read,
    /// Viewer can edit layers and filters
    Edit,
}

impl DocumentMode {
    /// Parse a mode from its request name
    pub fn from_name(name: &str) -> Option<DocumentMode> {
        match name.to_lowercase().as_str() {
            "read" => Some(DocumentMode::Read),
            "edit" => Some(DocumentMode::Edit),
            _ => None,
        }
    }

    /// Value embedded into the rendered document
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentMode::Read => "READ",
            DocumentMode::Edit => "EDIT",
        }
    }
}

/// Options for a standalone document export
#[derive(Debug, Clone)]
pub struct StandaloneDocumentOptions {
    /// Explicit token override from the user
    pub user_token: Option<String>,
    /// Token used when no override is given
    pub fallback_token: String,
    /// Interaction mode to embed
    pub mode: DocumentMode,
}

/// Resolve the access token to embed
///
/// The explicit override wins only when it is a non-empty string;
/// otherwise the fallback token is used.
pub fn resolve_access_token(user_token: Option<&str>, fallback_token: &str) -> String {
    match user_token {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => fallback_token.to_string(),
    }
}

/// Render a saved map document into a self-contained HTML page
///
/// # Arguments
/// * `document` - The saved map to embed
/// * `access_token` - Base-map provider token to embed
/// * `mode` - Interaction mode to embed
///
/// # Returns
/// The rendered HTML text
pub fn render_standalone_document(
    document: &SavedMapDocument,
    access_token: &str,
    mode: DocumentMode,
) -> ExportResult<String> {
    let map_json = escape_script_content(&serde_json::to_string(document)?);
    let token_json = escape_script_content(&serde_json::to_string(access_token)?);
    let title = if document.info.title.is_empty() {
        "Exported Map"
    } else {
        &document.info.title
    };

    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"utf-8\"/>");
    let _ = writeln!(
        out,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    );
    let _ = writeln!(out, "  <title>{}</title>", escape_html(title));
    let _ = writeln!(
        out,
        "  <style>html, body, #app {{margin: 0; padding: 0; width: 100%; height: 100%;}}</style>"
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "  <div id=\"app\"></div>");
    let _ = writeln!(out, "  <script>");
    let _ = writeln!(out, "    window.__MAP_DOCUMENT__ = {};", map_json);
    let _ = writeln!(out, "    window.__MAP_ACCESS_TOKEN__ = {};", token_json);
    let _ = writeln!(out, "    window.__MAP_MODE__ = \"{}\";", mode.as_str());
    let _ = writeln!(out, "  </script>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    Ok(out)
}

/// Close-tag sequences inside inline script content would terminate the
/// surrounding script element early.
fn escape_script_content(content: &str) -> String {
    content.replace("</", "<\\/")
}

fn escape_html(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}
