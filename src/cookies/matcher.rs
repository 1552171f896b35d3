//! Name matching against the raw cookie string.

use regex::Regex;

/// A compiled pattern locating one cookie in a raw cookie string.
///
/// Matches `name=value` either at the start of the string or after a `;`
/// followed by any whitespace, and captures the value lazily up to the next
/// `;` or the end of the string.
#[derive(Debug, Clone)]
pub struct CookieMatcher {
    regex: Regex,
}

impl CookieMatcher {
    /// Build a matcher for an already percent-encoded cookie name.
    ///
    /// Every regex metacharacter in the name is escaped, so names such as
    /// `a(b)`, `x.y*` or `$^` match literally.
    pub fn new(encoded_name: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(encoded_name);
        let pattern = format!(r"(?:^{escaped}|;\s*{escaped})=(.*?)(?:;|$)");
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }

    /// The still-encoded value of the first match, if any.
    pub fn capture_value<'r>(&self, raw: &'r str) -> Option<&'r str> {
        self.regex
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
