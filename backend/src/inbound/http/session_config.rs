//! Session cookie configuration.
//!
//! Centralises the environment-driven session settings so they are applied
//! consistently by the server and can be exercised in isolation.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use sha2::{Digest, Sha512};
use tracing::warn;
use zeroize::Zeroize;

/// Environment variable holding the cookie signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";
/// Environment variable toggling the `Secure` cookie flag (`0` disables).
pub const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";

// Development fallback matching the original deployment default.
const DEV_FALLBACK_SECRET: &str = "abc123";

/// Session settings derived from the environment.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

/// Stretch an arbitrary-length secret into a signing key.
///
/// `Key::derive_from` requires at least 32 bytes of input; SHA-512 turns the
/// configured secret (which may be short) into a fixed 64-byte seed.
fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::derive_from(&digest)
}

/// Build session settings from environment variables.
///
/// Falls back to a hardcoded development secret when `SECRET_KEY` is unset,
/// logging a warning so the misconfiguration is visible in production logs.
pub fn session_settings_from_env() -> SessionSettings {
    let mut secret = std::env::var(SECRET_KEY_ENV).unwrap_or_else(|_| {
        warn!(
            env = SECRET_KEY_ENV,
            "secret key not configured; using development fallback"
        );
        DEV_FALLBACK_SECRET.to_owned()
    });
    let key = derive_key(&secret);
    secret.zeroize();

    let cookie_secure = std::env::var(COOKIE_SECURE_ENV)
        .map(|value| value != "0")
        .unwrap_or(!cfg!(debug_assertions));

    SessionSettings { key, cookie_secure }
}

/// Build the cookie-session middleware from settings.
pub fn session_middleware(settings: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), settings.key.clone())
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(settings.cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn key_derivation_is_deterministic() {
        let first = derive_key("abc123");
        let second = derive_key("abc123");
        assert_eq!(first.master(), second.master());
    }

    #[rstest]
    fn distinct_secrets_produce_distinct_keys() {
        let first = derive_key("abc123");
        let second = derive_key("abc124");
        assert_ne!(first.master(), second.master());
    }

    #[rstest]
    fn short_secrets_are_stretched() {
        // A one-character secret would panic in Key::derive_from without the
        // SHA-512 stretch.
        let _key = derive_key("x");
    }
}
