//! Service configuration.
//!
//! The only decision a host has to make is whether the current execution
//! context owns a real cookie store. Browsers do; pre-rendering and other
//! server-side contexts do not, and every operation then degrades to its
//! documented fallback.

/// Configuration for a [`CookieService`](crate::cookies::service::CookieService).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CookieConfig {
    /// Whether the cookie store may be touched at all (default: true)
    pub accessible: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::browser()
    }
}

impl CookieConfig {
    /// A browser context with a live cookie store.
    pub fn browser() -> Self {
        Self { accessible: true }
    }

    /// A server-side or pre-rendering context without a cookie store.
    pub fn server() -> Self {
        Self { accessible: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browser() {
        assert_eq!(CookieConfig::default(), CookieConfig::browser());
        assert!(CookieConfig::browser().accessible);
        assert!(!CookieConfig::server().accessible);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_config() {
        let config: CookieConfig = serde_json::from_str(r#"{"accessible": false}"#).unwrap();
        assert_eq!(config, CookieConfig::server());

        // Missing fields fall back to the browser defaults.
        let config: CookieConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CookieConfig::browser());
    }
}
