//! OpenAPI document for the HTTP surface.
//!
//! No interactive docs UI ships with the service; the document exists for
//! client generation and contract review.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FeedbackId, UserId};
use crate::inbound::http::forms::{FeedbackForm, LoginForm, RegisterForm};
use crate::inbound::http::session::{Flash, FlashLevel};
use crate::inbound::http::views::{FeedbackPageView, FeedbackView, PageView, ProfileView, UserView};
use crate::inbound::http::{auth, feedback, health, users};

/// Aggregated OpenAPI document for every route and schema.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::home,
        auth::register_page,
        auth::register_submit,
        auth::login_page,
        auth::login_submit,
        auth::logout,
        users::show_user,
        users::delete_user,
        feedback::add_feedback_page,
        feedback::add_feedback_submit,
        feedback::edit_feedback_page,
        feedback::update_feedback,
        feedback::delete_feedback,
        health::ready,
        health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Flash,
        FlashLevel,
        PageView,
        UserView,
        FeedbackView,
        ProfileView,
        FeedbackPageView,
        RegisterForm,
        LoginForm,
        FeedbackForm,
        UserId,
        FeedbackId,
    )),
    tags(
        (name = "auth", description = "Registration, login, and logout"),
        (name = "users", description = "Profile pages and account deletion"),
        (name = "feedback", description = "Per-user feedback posts"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/",
            "/register",
            "/login",
            "/logout",
            "/user/{id}",
            "/user/{id}/delete",
            "/user/{id}/feedback/add",
            "/feedback/{id}/update",
            "/feedback/{id}/delete",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path: {path}");
        }
    }
}
