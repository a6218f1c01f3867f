//! Base64 text codec used for names and credentials on the wire.
//!
//! The backend does not encode its fields consistently, so [`decode`] never
//! fails: input that is not valid Base64 (or does not decode to UTF-8 text)
//! is returned unchanged and treated as plaintext.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode text as standard padded Base64
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode Base64 text, falling back to the input itself on any failure
pub fn decode(encoded: &str) -> String {
    try_decode(encoded).unwrap_or_else(|| encoded.to_string())
}

/// Strict variant of [`decode`]: `None` when the input is not Base64 text
pub fn try_decode(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}
