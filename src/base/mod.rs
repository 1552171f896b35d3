//! Base types and error handling.
//!
//! - [`CookieConfig`](config::CookieConfig): whether the host has a cookie store
//! - [`CookieError`](cookieerror::CookieError): errors from the strict codec helpers

pub mod config;
pub mod cookieerror;
