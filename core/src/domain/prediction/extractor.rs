//! Locates the JSON object inside a free-text model reply.
//!
//! Models asked for "JSON only" still wrap the object in prose or code
//! fences, so the reply is scanned instead of parsed whole:
//!
//! 1. slice from the first `{` to the last `}` of the whole reply and parse;
//! 2. otherwise take the first line holding both braces and parse the slice
//!    between its first `{` and last `}`.
//!
//! Only the first qualifying line is ever tried. A reply that spreads
//! several objects over separate lines yields the first one.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::prediction::errors::ExtractionError;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPayload {
    pub fields: Map<String, Value>,
    /// The exact text that was parsed, kept as the raw AI response.
    pub candidate: String,
}

pub fn extract_json_payload(raw: &str) -> Result<ExtractedPayload, ExtractionError> {
    let mut span_error = None;

    if let Some(candidate) = brace_span(raw) {
        match parse_object(candidate) {
            Ok(fields) => {
                return Ok(ExtractedPayload {
                    fields,
                    candidate: candidate.to_string(),
                });
            }
            Err(e) => {
                debug!("outer brace span did not parse, scanning lines: {}", e);
                span_error = Some(e);
            }
        }
    }

    let Some(line) = raw.lines().find(|l| l.contains('{') && l.contains('}')) else {
        return Err(span_error.unwrap_or(ExtractionError::NoJsonFound));
    };

    // Braces out of order on the chosen line leave nothing to parse.
    let candidate = brace_span(line).unwrap_or_default();
    let fields = parse_object(candidate)?;

    Ok(ExtractedPayload {
        fields,
        candidate: candidate.to_string(),
    })
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    (start < end).then(|| &text[start..=end])
}

fn parse_object(candidate: &str) -> Result<Map<String, Value>, ExtractionError> {
    serde_json::from_str::<Map<String, Value>>(candidate)
        .map_err(|e| ExtractionError::Parse(e.to_string()))
}
