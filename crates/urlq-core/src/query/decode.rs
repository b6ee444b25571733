//! Decoding of individual query components
//!
//! Percent-decoding itself is delegated to `percent-encoding`, which passes
//! malformed escapes through untouched. We reject them up front instead so
//! the tokenizer can drop the offending entry.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use thiserror::Error;

/// Decode error for a single key or value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed percent-escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Decode one `application/x-www-form-urlencoded` component.
///
/// `+` is turned into a space first (when `plus_as_space` is set), so an
/// encoded `%2B` still decodes to a literal `+`.
///
/// # Examples
/// ```
/// use urlq_core::query::decode_component;
///
/// assert_eq!(decode_component("a+b%21", true).unwrap(), "a b!");
/// assert_eq!(decode_component("a+b", false).unwrap(), "a+b");
/// assert!(decode_component("100%", true).is_err());
/// ```
pub fn decode_component(raw: &str, plus_as_space: bool) -> Result<String, DecodeError> {
    validate_escapes(raw)?;

    let spaced: Cow<'_, str> = if plus_as_space && raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Every `%` must be followed by exactly two hex digits.
fn validate_escapes(raw: &str) -> Result<(), DecodeError> {
    let bytes = raw.as_bytes();
    let mut position = 0;

    while position < bytes.len() {
        if bytes[position] == b'%' {
            let well_formed = bytes
                .get(position + 1..position + 3)
                .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(DecodeError::MalformedEscape { position });
            }
            position += 3;
        } else {
            position += 1;
        }
    }

    Ok(())
}
