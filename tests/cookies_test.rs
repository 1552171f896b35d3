use cookiestring::cookies::document::MemoryDocument;
use cookiestring::cookies::options::{CookieOptions, CookieScope, SameSite};
use cookiestring::cookies::service::CookieService;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn service() -> CookieService<MemoryDocument> {
    CookieService::browser(MemoryDocument::new())
}

/// Counts `WARN` events.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_unknown_cookie_is_absent() {
    let cookies = service();
    assert!(!cookies.exists("never"));
    assert_eq!(cookies.read("never"), "");
    assert!(cookies.read_all().is_empty());
}

#[test]
fn test_metacharacter_names_round_trip() {
    let cookies = service();
    let names = [
        "(", ")", "[", "]", "{", "}", "|", "=", ";", "+", "?", ",", ".", "*", "^", "$",
        "a(b)c", "x.y", "k[0]", "$^.*",
    ];

    for (i, name) in names.iter().enumerate() {
        let value = format!("value-{i}");
        cookies.write(name, &value, CookieOptions::new());
        assert!(cookies.exists(name), "name {name}");
        assert_eq!(cookies.read(name), value, "name {name}");
    }
}

#[test]
fn test_values_needing_encoding_round_trip() {
    let cookies = service();
    let values = ["a;b", "k=v", "two words", "ünïcödé", "日本語", "%20", "100%", ""];

    for value in values {
        cookies.write("v", value, CookieOptions::new());
        assert_eq!(cookies.read("v"), value);
    }
}

#[test]
fn test_overwrite_not_append() {
    let cookies = service();
    cookies.write("a", "1", CookieOptions::new());
    cookies.write("a", "2", CookieOptions::new());

    assert_eq!(cookies.read("a"), "2");
    assert_eq!(cookies.read_all().len(), 1);
}

#[test]
fn test_read_all() {
    let cookies = service();
    cookies.write("y", "2", CookieOptions::new());
    cookies.write("x", "1", CookieOptions::new());

    let all = cookies.read_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all["x"], "1");
    assert_eq!(all["y"], "2");
}

#[test]
fn test_read_all_decodes_names_and_values() {
    let cookies = service();
    cookies.write("user name", "a; b", CookieOptions::new());

    let all = cookies.read_all();
    assert_eq!(all["user name"], "a; b");
}

#[test]
fn test_same_site_none_forces_secure() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    let cookies = service();
    tracing::subscriber::with_default(subscriber, || {
        cookies.write(
            "s",
            "v",
            CookieOptions::new().secure(false).same_site(SameSite::None),
        );
    });

    let line = cookies.document().last_line().unwrap();
    assert!(line.contains("secure;"), "{line}");
    assert!(line.ends_with("sameSite=None;"), "{line}");
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
    assert!(cookies.document().cookies()[0].secure);
}

#[test]
fn test_secure_same_site_none_does_not_warn() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    let cookies = service();
    tracing::subscriber::with_default(subscriber, || {
        cookies.write(
            "s",
            "v",
            CookieOptions::new().secure(true).same_site(SameSite::None),
        );
        cookies.write("t", "v", CookieOptions::new().same_site(SameSite::Strict));
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}

#[test]
fn test_same_site_defaults_to_lax() {
    let cookies = service();
    cookies.write("a", "1", CookieOptions::new().path("/"));
    assert_eq!(
        cookies.document().last_line().unwrap(),
        "a=1;path=/;sameSite=Lax;"
    );
}

#[test]
fn test_delete() {
    let cookies = service();
    cookies.write("a", "1", CookieOptions::new());
    cookies.write("b", "2", CookieOptions::new());

    cookies.delete("a", &CookieScope::default());

    assert!(!cookies.exists("a"));
    assert_eq!(cookies.read("a"), "");
    assert_eq!(cookies.read("b"), "2");
}

#[test]
fn test_delete_needs_matching_path() {
    let cookies = service();
    cookies.write("a", "1", CookieOptions::new().path("/app"));

    // Different path: the browser treats it as another cookie.
    cookies.delete("a", &CookieScope::new().path("/other"));
    assert!(cookies.exists("a"));

    cookies.delete("a", &CookieScope::new().path("/app"));
    assert!(!cookies.exists("a"));
}

#[test]
fn test_delete_all() {
    let cookies = service();
    cookies.write("one", "1", CookieOptions::new());
    cookies.write("two", "2", CookieOptions::new());
    cookies.write("three words", "3", CookieOptions::new());

    cookies.delete_all(&CookieScope::default());

    assert!(cookies.read_all().is_empty());
    assert!(cookies.document().is_empty());
}

#[test]
fn test_delete_all_with_scope() {
    let cookies = service();
    let scope = CookieScope::new().path("/app").domain("example.com");
    let options = CookieOptions::new().path("/app").domain("example.com");
    cookies.write("a", "1", options.clone());
    cookies.write("b", "2", options);
    cookies.write("root", "3", CookieOptions::new());

    cookies.delete_all(&scope);

    // Only the cookies written within the scope are gone.
    let all = cookies.read_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all["root"], "3");
}

#[test]
fn test_expired_write_is_not_readable() {
    let cookies = service();
    cookies.write("old", "x", CookieOptions::new().expires_in_days(-1.0));
    assert!(!cookies.exists("old"));
}

proptest! {
    #[test]
    fn prop_metacharacter_names_round_trip(
        name in "[a-z()\\[\\]{}|=;+?,.*^$]{1,12}",
        value in "[a-z0-9]{0,8}",
    ) {
        let cookies = service();
        cookies.write(&name, &value, CookieOptions::new());
        prop_assert!(cookies.exists(&name));
        prop_assert_eq!(cookies.read(&name), value);
    }

    #[test]
    fn prop_values_round_trip(value in any::<String>()) {
        let cookies = service();
        cookies.write("v", &value, CookieOptions::new());
        prop_assert_eq!(cookies.read("v"), value.clone());
        prop_assert_eq!(cookies.read_all().get("v").cloned(), Some(value));
    }
}
