//! Generic JSON encode/decode helpers.
//!
//! Thin wrappers over [`serde_json`] used wherever the toolkit moves
//! structured values through text. Decoding targets a concrete type, so
//! the behavior available on the result is whatever that type implements;
//! no fields are validated beyond what its `Deserialize` impl requires.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be encoded as JSON.
    #[error("value could not be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input text is not valid JSON for the target type.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Encode a value as its textual JSON form.
///
/// Key order follows whatever the value's `Serialize` impl enumerates; no
/// further ordering is imposed.
///
/// # Errors
///
/// [`JsonError::Encode`] when the value cannot be represented as JSON
/// (for example, a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse JSON text into a typed value.
///
/// # Errors
///
/// [`JsonError::Parse`] when `text` is not valid JSON or does not match
/// the shape `T` requires.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}
