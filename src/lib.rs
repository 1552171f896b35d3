//! # cookiestring
//!
//! Typed access to a browser-style cookie string.
//!
//! A browser exposes all cookies of the current origin as a single mutable
//! string: reading it yields `a=1; b=2`, assigning a `name=value; attr=...;`
//! line upserts one cookie. `cookiestring` wraps that string with read, write,
//! enumerate and delete operations, URI-component encoding of names and
//! values, and `Set-Cookie` attribute handling.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiestring::cookies::document::MemoryDocument;
//! use cookiestring::cookies::options::{CookieOptions, CookieScope};
//! use cookiestring::cookies::service::CookieService;
//!
//! let cookies = CookieService::browser(MemoryDocument::new());
//!
//! cookies.write(
//!     "session",
//!     "abc; 123",
//!     CookieOptions::new().expires_in_days(7.0).path("/"),
//! );
//! assert_eq!(cookies.read("session"), "abc; 123");
//!
//! // Legacy shape: a bare number is days, or seconds above 31.
//! cookies.write("flash", "hello", 40);
//!
//! cookies.delete("session", &CookieScope::new().path("/"));
//! assert!(!cookies.exists("session"));
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Configuration and error types
//! - [`cookies`] - The codec, the host capability, and the service
//!
//! ## Non-browser contexts
//!
//! Construct the service with [`CookieConfig::server`](base::config::CookieConfig::server)
//! when there is no cookie store (pre-rendering, server-side code). Reads
//! then return empty values and writes are skipped, without errors.

pub mod base;
pub mod cookies;

pub use base::config::CookieConfig;
pub use base::cookieerror::{CookieError, CookieResult};
pub use cookies::document::{CookieDocument, MemoryDocument};
pub use cookies::options::{
    CookieOptions, CookieScope, Expiry, LegacyArgs, LegacyExpiry, SameSite, WriteArgs,
};
pub use cookies::service::CookieService;
