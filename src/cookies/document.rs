//! The hosting environment's cookie string.
//!
//! A browser exposes every cookie of the current origin as one mutable string
//! (`document.cookie`): reading it yields `a=1; b=2`, assigning a
//! `name=value; attr=...;` line upserts a single cookie. [`CookieDocument`]
//! models exactly that capability so the service never reaches for a global.

use crate::cookies::options::SameSite;
use cookie::Cookie;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;

/// A single mutable cookie string owned by the host.
pub trait CookieDocument {
    /// All live cookies as `name=value` pairs joined with `"; "`.
    fn cookie(&self) -> String;

    /// Upsert one cookie from a `name=value; attr=...;` line.
    fn set_cookie(&self, line: &str);
}

impl<T: CookieDocument + ?Sized> CookieDocument for &T {
    fn cookie(&self) -> String {
        (**self).cookie()
    }

    fn set_cookie(&self, line: &str) {
        (**self).set_cookie(line)
    }
}

impl<T: CookieDocument + ?Sized> CookieDocument for Arc<T> {
    fn cookie(&self) -> String {
        (**self).cookie()
    }

    fn set_cookie(&self, line: &str) {
        (**self).set_cookie(line)
    }
}

impl<T: CookieDocument + ?Sized> CookieDocument for Rc<T> {
    fn cookie(&self) -> String {
        (**self).cookie()
    }

    fn set_cookie(&self, line: &str) {
        (**self).set_cookie(line)
    }
}

/// One cookie held by a [`MemoryDocument`], still percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    pub expires: Option<OffsetDateTime>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    seq: u64,
}

impl StoredCookie {
    fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires.is_some_and(|expiry| expiry <= now)
    }

    fn same_key(&self, other: &StoredCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }
}

#[derive(Debug, Default)]
struct JarState {
    cookies: Vec<StoredCookie>,
    lines: Vec<String>,
    next_seq: u64,
}

/// In-memory `document.cookie`.
///
/// Cookies are keyed by name, domain and path; setting a cookie with the same
/// key replaces it, and setting one whose expiry is not in the future removes
/// it. Reading lists live cookies ordered by path length (longest first),
/// then by creation order, the way browsers serialize them.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<JarState>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, JarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every line assigned so far, in order, including rejected ones.
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.clone()
    }

    /// The most recently assigned line.
    pub fn last_line(&self) -> Option<String> {
        self.lock().lines.last().cloned()
    }

    /// Live cookies in read order.
    pub fn cookies(&self) -> Vec<StoredCookie> {
        let now = OffsetDateTime::now_utc();
        let mut live: Vec<StoredCookie> = self
            .lock()
            .cookies
            .iter()
            .filter(|c| !c.is_expired(now))
            .cloned()
            .collect();

        live.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.seq.cmp(&b.seq))
        });
        live
    }

    /// Number of live cookies.
    pub fn len(&self) -> usize {
        self.cookies().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cookie and the recorded lines.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.cookies.clear();
        state.lines.clear();
    }
}

impl CookieDocument for MemoryDocument {
    fn cookie(&self) -> String {
        self.cookies()
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, line: &str) {
        let mut state = self.lock();
        state.lines.push(line.to_string());

        let parsed = match Cookie::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "cookie line rejected");
                return;
            }
        };

        let same_site = match parsed.same_site() {
            Some(cookie::SameSite::Lax) => Some(SameSite::Lax),
            Some(cookie::SameSite::Strict) => Some(SameSite::Strict),
            Some(cookie::SameSite::None) => Some(SameSite::None),
            None => None,
        };

        let seq = state.next_seq;
        state.next_seq += 1;

        let incoming = StoredCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain: parsed
                .domain()
                .map(|d| d.trim_start_matches('.').to_lowercase()),
            path: parsed.path().unwrap_or("/").to_string(),
            expires: parsed.expires().and_then(|e| e.datetime()),
            secure: parsed.secure().unwrap_or(false),
            same_site,
            seq,
        };

        // A replaced cookie keeps its original position.
        let existing = state.cookies.iter().position(|c| c.same_key(&incoming));
        let now = OffsetDateTime::now_utc();

        match (existing, incoming.is_expired(now)) {
            (Some(idx), true) => {
                state.cookies.remove(idx);
            }
            (Some(idx), false) => {
                let original_seq = state.cookies[idx].seq;
                state.cookies[idx] = StoredCookie {
                    seq: original_seq,
                    ..incoming
                };
            }
            (None, true) => {}
            (None, false) => state.cookies.push(incoming),
        }
    }
}
