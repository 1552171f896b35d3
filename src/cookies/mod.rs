//! The cookie string codec and the service built on it.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`encoding`] | URI-component encoding, strict and best-effort decoding |
//! | [`matcher`] | Locating one cookie in the raw string |
//! | [`codec`] | Parsing the raw string, serializing a write |
//! | [`options`] | Write options, legacy call shape, delete scope |
//! | [`document`] | The host's cookie string capability, in-memory jar |
//! | [`service`] | [`CookieService`](service::CookieService), the public surface |
//!
//! # Reading
//!
//! `read` matches `name=` at the start of the string or after `;` plus any
//! whitespace. `read_all` splits on `;` and strips exactly one leading space
//! from each name. The two differ for names preceded by extra whitespace; both
//! behaviours are kept as they are.
//!
//! # Writing
//!
//! ```rust
//! use cookiestring::cookies::codec::serialize;
//! use cookiestring::cookies::options::{CookieOptions, SameSite};
//! use time::macros::datetime;
//!
//! let options = CookieOptions::new().path("/").same_site(SameSite::None);
//! let cookie = serialize("id", "42", &options, datetime!(2024-01-01 0:00 UTC));
//! assert_eq!(cookie.line, "id=42;path=/;secure;sameSite=None;");
//! assert!(cookie.secure_coerced);
//! ```

pub mod codec;
pub mod document;
pub mod encoding;
pub mod matcher;
pub mod options;
pub mod service;
