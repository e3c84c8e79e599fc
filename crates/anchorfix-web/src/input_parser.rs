#![forbid(unsafe_code)]

//! JSON input parser for converting host-encoded page events to
//! [`PageEvent`] values.
//!
//! The JS glue batches DOM notifications as JSON objects with a `kind`
//! discriminator (`"load"`, `"click"`, `"hashchange"`, `"typeset"`). Kinds
//! without a [`PageEvent`] mapping return `Ok(None)` so the glue can forward
//! its whole notification stream without filtering. Feature-gated behind
//! `input-parser`.

use anchorfix_core::PageEvent;
use serde::Deserialize;

/// Errors from parsing encoded page-event JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Internal deserialization target matching the glue's JSON schema.
#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    href: Option<String>,
}

/// Parse one JSON-encoded page notification into a [`PageEvent`].
///
/// Returns `Ok(None)` for kinds with no `PageEvent` equivalent (scroll,
/// resize, unknown). Returns `Err` for malformed JSON or a `click` without
/// an `href`.
pub fn parse_encoded_page_event(json: &str) -> Result<Option<PageEvent>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    match raw.kind.as_str() {
        "load" => Ok(Some(PageEvent::PageLoaded)),
        "click" => {
            let href = raw.href.ok_or(InputParseError::MissingField("href"))?;
            Ok(Some(PageEvent::AnchorClicked { href }))
        }
        "hashchange" => Ok(Some(PageEvent::FragmentChanged)),
        "typeset" => Ok(Some(PageEvent::ContentSettled)),
        // Scroll, resize, and unknown kinds have no PageEvent mapping.
        _ => Ok(None),
    }
}
