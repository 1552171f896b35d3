use thiserror::Error;

/// Errors raised by the strict parts of the cookie codec.
///
/// None of these escape a [`CookieService`](crate::cookies::service::CookieService)
/// operation: the service recovers from each one locally. They surface only
/// through the lower-level helpers (`decode_component`, `SameSite::from_str`).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    /// A `%` not followed by two hex digits.
    #[error("Invalid percent-escape at byte {position}")]
    InvalidEscape { position: usize },
    /// Escapes decoded to bytes that are not UTF-8.
    #[error("Percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,
    #[error("Unknown SameSite value: {0}")]
    InvalidSameSite(String),
}

impl CookieError {
    pub fn invalid_same_site(value: impl Into<String>) -> Self {
        Self::InvalidSameSite(value.into())
    }
}

/// Result type alias for codec helpers.
pub type CookieResult<T> = Result<T, CookieError>;
