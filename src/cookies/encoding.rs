//! URI-component percent-encoding for cookie names and values.
//!
//! Names and values are stored encoded so that `;`, `=`, whitespace and
//! non-ASCII text never leak into the cookie string's own syntax. Decoding is
//! strict in [`decode_component`] and best-effort in [`safe_decode`].

use crate::base::cookieerror::{CookieError, CookieResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped by URI-component encoding: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie name or value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Strictly decode a percent-encoded component.
///
/// Fails on a `%` that is not followed by two hex digits, and on escapes that
/// decode to invalid UTF-8. `+` is left as-is.
pub fn decode_component(input: &str) -> CookieResult<String> {
    let bytes = input.as_bytes();
    for (position, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let well_formed = bytes
            .get(position + 1..position + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(CookieError::InvalidEscape { position });
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| CookieError::InvalidUtf8)
}

/// Outcome of a best-effort decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The input was well-formed and has been decoded.
    Decoded(String),
    /// The input was malformed; the raw text is kept unchanged.
    Raw(String),
}

impl Decoded {
    pub fn is_raw(&self) -> bool {
        matches!(self, Decoded::Raw(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Decoded::Decoded(s) | Decoded::Raw(s) => s,
        }
    }
}

/// Decode, falling back to the raw text when the escapes are malformed.
pub fn try_decode(input: &str) -> Decoded {
    match decode_component(input) {
        Ok(decoded) => Decoded::Decoded(decoded),
        Err(_) => Decoded::Raw(input.to_string()),
    }
}

/// Best-effort decode returning the text directly.
pub fn safe_decode(input: &str) -> String {
    try_decode(input).into_string()
}
