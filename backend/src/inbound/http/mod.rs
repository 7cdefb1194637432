//! HTTP inbound adapter exposing the form-driven endpoints.

use actix_web::{HttpResponse, http::header, web};

pub mod auth;
pub mod error;
pub mod feedback;
pub mod forms;
pub mod guard;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::ApiResult;

/// Register every application route on the service config.
///
/// Health probes are wired separately because they carry their own state.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::home)
        .service(auth::register_page)
        .service(auth::register_submit)
        .service(auth::login_page)
        .service(auth::login_submit)
        .service(auth::logout)
        .service(users::show_user)
        .service(users::delete_user)
        .service(feedback::add_feedback_page)
        .service(feedback::add_feedback_submit)
        .service(feedback::edit_feedback_page)
        .service(feedback::update_feedback)
        .service(feedback::delete_feedback);
}

/// Post-redirect-get response pointing at `location`.
pub(crate) fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}
