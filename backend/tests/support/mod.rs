//! Shared harness for the HTTP integration suites.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use feedback_backend::inbound::http::state::HttpState;
use feedback_backend::inbound::http::{self};
use feedback_backend::outbound::persistence::MemoryStore;

/// Build the full application wired to a fresh in-memory store.
pub fn test_app() -> (
    App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    >,
    Arc<MemoryStore>,
) {
    let (state, store) = HttpState::in_memory();
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    let app = App::new()
        .app_data(web::Data::new(state))
        .wrap(session)
        .configure(http::configure);
    (app, store)
}

/// Extract the session cookie from a response.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// Registration form body for a user named `username`.
pub fn register_form(username: &str) -> [(&'static str, String); 5] {
    [
        ("username", username.to_owned()),
        ("password", "pw".to_owned()),
        ("email", format!("{username}@x.com")),
        ("first_name", "A".to_owned()),
        ("last_name", "L".to_owned()),
    ]
}
