//! Cookie write options and the legacy positional call shape.
//!
//! Callers describe a write either with a structured [`CookieOptions`] or with
//! the flattened [`LegacyArgs`] (`expires, path, domain, secure, same_site`).
//! Both are carried by [`WriteArgs`] and collapse into one [`CookieOptions`]
//! through [`WriteArgs::normalize`] before anything is serialized.

use crate::base::cookieerror::CookieError;
use std::fmt;
use std::str::FromStr;
use time::{Duration, OffsetDateTime};

/// Numeric legacy expiries above this many are read as seconds, not days.
pub const COOKIE_EXPIRY_DAYS_MAX: f64 = 31.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Cross-site inclusion policy of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SameSite {
    #[default]
    Lax,
    None,
    Strict,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::None => "None",
            SameSite::Strict => "Strict",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSite {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("lax") {
            Ok(SameSite::Lax)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(SameSite::None)
        } else if s.eq_ignore_ascii_case("strict") {
            Ok(SameSite::Strict)
        } else {
            Err(CookieError::invalid_same_site(s))
        }
    }
}

/// When a cookie expires. Exactly one form is active per write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expiry {
    /// An absolute instant.
    At(OffsetDateTime),
    /// Days from now.
    InDays(f64),
    /// Seconds from now, for sub-day precision.
    InSeconds(f64),
}

impl Expiry {
    /// Resolve to an absolute instant relative to `now`.
    ///
    /// Relative expiries of zero (or NaN) resolve to `None` and produce no
    /// `expires` attribute, as do offsets that overflow the calendar.
    pub fn resolve(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        let seconds = match *self {
            Expiry::At(at) => return Some(at),
            Expiry::InDays(days) => days * SECONDS_PER_DAY,
            Expiry::InSeconds(seconds) => seconds,
        };

        if seconds == 0.0 || seconds.is_nan() {
            return None;
        }

        Duration::checked_seconds_f64(seconds).and_then(|offset| now.checked_add(offset))
    }
}

/// Structured options for a single cookie write.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CookieOptions {
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expires_at(mut self, at: OffsetDateTime) -> Self {
        self.expires = Some(Expiry::At(at));
        self
    }

    pub fn expires_in_days(mut self, days: f64) -> Self {
        self.expires = Some(Expiry::InDays(days));
        self
    }

    pub fn expires_in_seconds(mut self, seconds: f64) -> Self {
        self.expires = Some(Expiry::InSeconds(seconds));
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }
}

/// Expiry argument of the legacy call shape: a bare number or an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegacyExpiry {
    /// Days from now, or seconds from now above [`COOKIE_EXPIRY_DAYS_MAX`].
    Number(f64),
    At(OffsetDateTime),
}

/// The flattened `expires, path, domain, secure, same_site` argument list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyArgs {
    pub expires: Option<LegacyExpiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl LegacyArgs {
    pub fn new(expires: impl Into<Option<LegacyExpiry>>) -> Self {
        Self {
            expires: expires.into(),
            ..Default::default()
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    /// Whether any positional argument was actually supplied.
    ///
    /// An expiry of either kind counts; path and domain count only when
    /// non-empty, `secure` only when true.
    pub fn is_positional(&self) -> bool {
        self.expires.is_some()
            || non_empty(&self.path)
            || non_empty(&self.domain)
            || self.secure
            || self.same_site.is_some()
    }

    fn into_options(self) -> CookieOptions {
        if !self.is_positional() {
            return CookieOptions::default();
        }

        let expires = self.expires.map(|expires| match expires {
            LegacyExpiry::Number(n) if n > COOKIE_EXPIRY_DAYS_MAX => Expiry::InSeconds(n),
            LegacyExpiry::Number(n) => Expiry::InDays(n),
            LegacyExpiry::At(at) => Expiry::At(at),
        });

        CookieOptions {
            expires,
            path: self.path,
            domain: self.domain,
            secure: self.secure,
            same_site: self.same_site.unwrap_or_default(),
        }
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Attributes that identify which cookie a delete targets.
///
/// A delete only removes the original cookie when path and domain match the
/// ones it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CookieScope {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Options expiring the cookie at `expired_at` within this scope.
    pub fn expire_at(&self, expired_at: OffsetDateTime) -> CookieOptions {
        CookieOptions {
            expires: Some(Expiry::At(expired_at)),
            path: self.path.clone(),
            domain: self.domain.clone(),
            secure: self.secure,
            same_site: self.same_site,
        }
    }
}

/// Either call shape accepted by a cookie write.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteArgs {
    Options(CookieOptions),
    Legacy(LegacyArgs),
}

impl Default for WriteArgs {
    fn default() -> Self {
        WriteArgs::Options(CookieOptions::default())
    }
}

impl WriteArgs {
    /// Collapse either shape into the canonical options.
    pub fn normalize(self) -> CookieOptions {
        match self {
            WriteArgs::Options(options) => options,
            WriteArgs::Legacy(legacy) => legacy.into_options(),
        }
    }
}

impl From<CookieOptions> for WriteArgs {
    fn from(options: CookieOptions) -> Self {
        WriteArgs::Options(options)
    }
}

impl From<LegacyArgs> for WriteArgs {
    fn from(legacy: LegacyArgs) -> Self {
        WriteArgs::Legacy(legacy)
    }
}

impl From<f64> for WriteArgs {
    fn from(expires: f64) -> Self {
        WriteArgs::Legacy(LegacyArgs::new(LegacyExpiry::Number(expires)))
    }
}

impl From<i32> for WriteArgs {
    fn from(expires: i32) -> Self {
        WriteArgs::from(f64::from(expires))
    }
}

impl From<OffsetDateTime> for WriteArgs {
    fn from(expires: OffsetDateTime) -> Self {
        WriteArgs::Legacy(LegacyArgs::new(LegacyExpiry::At(expires)))
    }
}
