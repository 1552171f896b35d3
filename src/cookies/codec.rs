//! The cookie string codec.
//!
//! Pure functions over the raw cookie string: locating and decoding one
//! cookie, enumerating all of them, and assembling the attribute string for a
//! write. Nothing here touches the hosting environment; see
//! [`CookieService`](crate::cookies::service::CookieService) for that.

use crate::cookies::encoding::{encode_component, safe_decode};
use crate::cookies::matcher::CookieMatcher;
use crate::cookies::options::{CookieOptions, SameSite};
use std::collections::BTreeMap;
use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{OffsetDateTime, UtcOffset};

/// `Thu, 01 Jan 1970 00:00:01 GMT`, the expiry written when deleting.
pub const DELETION_INSTANT: OffsetDateTime = datetime!(1970-01-01 0:00:01 UTC);

/// IMF-fixdate, e.g. `Sun, 10 Mar 2024 12:00:00 GMT`.
const EXPIRES_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format an instant the way `expires=` expects it.
pub fn format_expires(at: OffsetDateTime) -> Option<String> {
    at.to_offset(UtcOffset::UTC).format(EXPIRES_FORMAT).ok()
}

/// Whether a cookie with this (unencoded) name appears in `raw`.
pub fn contains(raw: &str, name: &str) -> bool {
    match CookieMatcher::new(&encode_component(name)) {
        Ok(matcher) => matcher.is_match(raw),
        Err(e) => {
            tracing::debug!(name = %name, error = %e, "cookie matcher rejected");
            false
        }
    }
}

/// The decoded value of the named cookie, `None` if absent.
///
/// An empty stored value reads as `Some("")`.
pub fn find(raw: &str, name: &str) -> Option<String> {
    let matcher = match CookieMatcher::new(&encode_component(name)) {
        Ok(matcher) => matcher,
        Err(e) => {
            tracing::debug!(name = %name, error = %e, "cookie matcher rejected");
            return None;
        }
    };

    matcher.capture_value(raw).map(|value| {
        if value.is_empty() {
            String::new()
        } else {
            safe_decode(value)
        }
    })
}

/// Decode every `name=value` pair of a raw cookie string.
///
/// Segments are split on `;`, then once on the first `=`. A single leading
/// space is stripped from each name; any further whitespace is kept. Later
/// duplicates replace earlier ones. Segments with neither a name nor a value
/// are skipped.
pub fn parse_all(raw: &str) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    if raw.is_empty() {
        return cookies;
    }

    for segment in raw.split(';') {
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = name.strip_prefix(' ').unwrap_or(name);
        if name.is_empty() && value.is_empty() {
            continue;
        }
        cookies.insert(safe_decode(name), safe_decode(value));
    }

    cookies
}

/// An assembled `Set-Cookie`-style line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedCookie {
    pub line: String,
    /// `secure` was forced on because of `SameSite=None`.
    pub secure_coerced: bool,
}

/// Assemble the cookie line for a write.
///
/// Attribute order is fixed: `name=value;`, `expires=`, `path=`, `domain=`,
/// `secure;`, `sameSite=`. `sameSite` is always written. A `SameSite=None`
/// cookie is always written `secure`; forcing it logs one warning.
pub fn serialize(
    name: &str,
    value: &str,
    options: &CookieOptions,
    now: OffsetDateTime,
) -> SerializedCookie {
    let mut line = format!("{}={};", encode_component(name), encode_component(value));

    if let Some(expires) = options.expires {
        match expires.resolve(now).and_then(format_expires) {
            Some(formatted) => {
                line.push_str("expires=");
                line.push_str(&formatted);
                line.push(';');
            }
            None => tracing::debug!(name = %name, ?expires, "cookie expiry omitted"),
        }
    }

    if let Some(path) = options.path.as_deref().filter(|p| !p.is_empty()) {
        line.push_str("path=");
        line.push_str(path);
        line.push(';');
    }

    if let Some(domain) = options.domain.as_deref().filter(|d| !d.is_empty()) {
        line.push_str("domain=");
        line.push_str(domain);
        line.push(';');
    }

    let secure_coerced = options.same_site == SameSite::None && !options.secure;
    if secure_coerced {
        tracing::warn!(
            name = %name,
            "cookie {} was forced with secure flag because sameSite=None",
            name
        );
    }
    if options.secure || secure_coerced {
        line.push_str("secure;");
    }

    line.push_str("sameSite=");
    line.push_str(options.same_site.as_str());
    line.push(';');

    SerializedCookie {
        line,
        secure_coerced,
    }
}
