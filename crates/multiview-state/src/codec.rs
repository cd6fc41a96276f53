//! Base64 JSON codec for the `state` URL parameter.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use multiview_common::CodecError;
use tracing::warn;

use crate::compact::{CompactState, STATE_VERSION};

/// Serialize to JSON, then URL-safe base64 without padding.
pub fn encode(state: &CompactState) -> String {
    let json = serde_json::to_vec(state).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a `state` parameter, surfacing why it was rejected.
///
/// Accepts both base64 alphabets, with or without padding. A `+` that a
/// form decoder turned into a space is restored first.
pub fn try_decode(param: &str) -> Result<CompactState, CodecError> {
    let trimmed = param.trim();
    if trimmed.is_empty() {
        return Err(CodecError::Empty);
    }

    let normalized: String = trimmed
        .trim_end_matches('=')
        .chars()
        .filter_map(|c| match c {
            ' ' | '+' => Some('-'),
            '/' => Some('_'),
            '\n' | '\r' | '\t' => None,
            other => Some(other),
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| CodecError::Base64(e.to_string()))?;
    let json = std::str::from_utf8(&bytes).map_err(|e| CodecError::Json(e.to_string()))?;
    from_json(json)
}

/// Decode a `state` parameter. Any failure is logged and yields `None`
/// so the caller can fall back to defaults.
pub fn decode(param: &str) -> Option<CompactState> {
    match try_decode(param) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(error = %e, "discarding state parameter");
            None
        }
    }
}

/// Parse a JSON blob, checking the version before the rest of the shape.
///
/// A blob written by another schema version may not deserialize at all;
/// reading `v` first reports that as a version mismatch.
pub(crate) fn from_json(json: &str) -> Result<CompactState, CodecError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CodecError::Json(e.to_string()))?;

    let found = value
        .get("v")
        .and_then(serde_json::Value::as_u64)
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));
    if found != STATE_VERSION {
        return Err(CodecError::VersionMismatch {
            expected: STATE_VERSION,
            found,
        });
    }

    serde_json::from_value(value).map_err(|e| CodecError::Json(e.to_string()))
}

pub(crate) fn to_json(state: &CompactState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}
