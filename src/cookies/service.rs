use crate::base::config::CookieConfig;
use crate::cookies::codec::{self, DELETION_INSTANT};
use crate::cookies::document::CookieDocument;
use crate::cookies::options::{CookieScope, WriteArgs};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Typed access to a host's cookie string.
///
/// Every operation first checks whether the store is accessible (see
/// [`CookieConfig::accessible`]); when it is not, reads return their empty
/// fallback and writes do nothing. The raw string is re-read on every call
/// because other code may change it in between.
pub struct CookieService<D> {
    document: D,
    config: CookieConfig,
}

impl<D: CookieDocument> CookieService<D> {
    pub fn new(document: D, config: CookieConfig) -> Self {
        Self { document, config }
    }

    /// A service for a browser context.
    pub fn browser(document: D) -> Self {
        Self::new(document, CookieConfig::browser())
    }

    pub fn is_accessible(&self) -> bool {
        self.config.accessible
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Whether a cookie with this name is present.
    pub fn exists(&self, name: &str) -> bool {
        if !self.config.accessible {
            return false;
        }
        codec::contains(&self.document.cookie(), name)
    }

    /// The decoded value of a cookie, or `""` when absent.
    ///
    /// A present cookie with an empty value also reads as `""`; use
    /// [`exists`](Self::exists) to tell the two apart. Malformed escapes are
    /// returned undecoded.
    pub fn read(&self, name: &str) -> String {
        if !self.config.accessible || !self.exists(name) {
            return String::new();
        }
        codec::find(&self.document.cookie(), name).unwrap_or_default()
    }

    /// Every cookie, decoded, keyed by name.
    pub fn read_all(&self) -> BTreeMap<String, String> {
        if !self.config.accessible {
            return BTreeMap::new();
        }
        codec::parse_all(&self.document.cookie())
    }

    /// Write a cookie.
    ///
    /// Accepts structured [`CookieOptions`](crate::cookies::options::CookieOptions),
    /// the legacy positional [`LegacyArgs`](crate::cookies::options::LegacyArgs),
    /// or a bare number / instant as the legacy expiry.
    pub fn write(&self, name: &str, value: &str, args: impl Into<WriteArgs>) {
        if !self.config.accessible {
            tracing::debug!(name = %name, "cookie store inaccessible, write skipped");
            return;
        }

        let options = args.into().normalize();
        let serialized = codec::serialize(name, value, &options, OffsetDateTime::now_utc());
        tracing::debug!(name = %name, line = %serialized.line, "writing cookie");
        self.document.set_cookie(&serialized.line);
    }

    /// Delete a cookie by expiring it.
    ///
    /// `scope` must carry the path and domain the cookie was written with.
    pub fn delete(&self, name: &str, scope: &CookieScope) {
        if !self.config.accessible {
            return;
        }
        self.write(name, "", scope.expire_at(DELETION_INSTANT));
    }

    /// Delete every cookie currently visible, all with the same `scope`.
    ///
    /// Names are snapshotted once; cookies added while deleting survive.
    pub fn delete_all(&self, scope: &CookieScope) {
        if !self.config.accessible {
            return;
        }

        let names = self.read_all();
        tracing::debug!(count = names.len(), "deleting all cookies");
        for name in names.keys() {
            self.delete(name, scope);
        }
    }
}
