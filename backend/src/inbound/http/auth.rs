//! Registration, login, and logout handlers.
//!
//! ```text
//! GET  /           redirect to /register
//! GET  /register   registration page view
//! POST /register   create account, establish session
//! GET  /login      login page view
//! POST /login      authenticate, establish session
//! GET  /logout     clear the session
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::RegistrationError;

use super::ApiResult;
use super::forms::{LoginForm, RegisterForm, invalid_credentials_error, username_taken_error};
use super::guard;
use super::see_other;
use super::session::{FlashLevel, SessionContext};
use super::state::HttpState;
use super::views::PageView;

/// Landing page: everything starts at registration.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 302, description = "Redirect to /register")),
    tags = ["auth"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/register"))
        .finish()
}

/// Registration page view.
#[utoipa::path(
    get,
    path = "/register",
    responses((status = 200, description = "Registration page", body = PageView)),
    tags = ["auth"],
    operation_id = "registerPage"
)]
#[get("/register")]
pub async fn register_page(session: SessionContext) -> ApiResult<web::Json<PageView>> {
    Ok(web::Json(PageView {
        flashes: session.take_flashes(),
    }))
}

/// Create an account and establish a session.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created; redirect to the new profile"),
        (status = 400, description = "Validation failure or username taken", body = crate::domain::Error)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let registration = form.into_inner().into_registration()?;
    match state.accounts.register(registration).await {
        Ok(user) => {
            session.persist_user(user.id())?;
            session.flash(
                FlashLevel::Success,
                "Welcome! Successfully Created Your Account!",
            );
            info!(user_id = %user.id(), "account registered");
            Ok(see_other(format!("/user/{}", user.id())))
        }
        Err(RegistrationError::UsernameTaken) => Err(username_taken_error()),
        Err(RegistrationError::Other(err)) => Err(err),
    }
}

/// Login page view.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login page", body = PageView)),
    tags = ["auth"],
    operation_id = "loginPage"
)]
#[get("/login")]
pub async fn login_page(session: SessionContext) -> ApiResult<web::Json<PageView>> {
    Ok(web::Json(PageView {
        flashes: session.take_flashes(),
    }))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Login success; redirect to the profile"),
        (status = 400, description = "Validation failure or invalid credentials", body = crate::domain::Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = form.into_inner().into_credentials()?;
    match state.accounts.authenticate(&credentials).await? {
        Some(user) => {
            session.persist_user(user.id())?;
            session.flash(
                FlashLevel::Primary,
                format!("Welcome Back, {}!", user.username()),
            );
            Ok(see_other(format!("/user/{}", user.id())))
        }
        None => Err(invalid_credentials_error()),
    }
}

/// Clear the session.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared; redirect home"),
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[get("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    guard::require_login(&session)?;
    session.forget_user();
    session.flash(FlashLevel::Info, "Goodbye!");
    Ok(see_other("/"))
}
