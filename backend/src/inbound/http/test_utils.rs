//! Helpers shared by the in-crate HTTP tests.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Cookie-session middleware with a throwaway signing key.
///
/// The `Secure` flag is off because the test client speaks plain HTTP; the
/// cookie name matches the one the runtime configuration uses so handlers
/// and tests agree.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
