//! Feedback CRUD handlers.
//!
//! ```text
//! GET  /user/{id}/feedback/add   owner-only creation page
//! POST /user/{id}/feedback/add   insert a feedback row
//! GET  /feedback/{id}/update     owner-only edit page
//! POST /feedback/{id}/update     apply title/content
//! POST /feedback/{id}/delete     remove the row
//! ```
//!
//! Update and delete resolve ownership from the stored row, not the URL, so
//! a feedback id can never be edited through someone else's session.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Error, Feedback, FeedbackId, NewFeedback, UserId};

use super::ApiResult;
use super::forms::FeedbackForm;
use super::guard;
use super::see_other;
use super::session::{FlashLevel, SessionContext};
use super::state::HttpState;
use super::views::{FeedbackPageView, FeedbackView, PageView};

async fn load_feedback(state: &HttpState, id: FeedbackId) -> ApiResult<Feedback> {
    state
        .feedback
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("feedback not found"))
}

/// Feedback creation page view.
#[utoipa::path(
    get,
    path = "/user/{id}/feedback/add",
    params(("id" = i64, Path, description = "Profile owner id")),
    responses(
        (status = 200, description = "Creation page", body = PageView),
        (status = 303, description = "Not logged in or not the owner; redirect to /login")
    ),
    tags = ["feedback"],
    operation_id = "addFeedbackPage"
)]
#[get("/user/{id}/feedback/add")]
pub async fn add_feedback_page(
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PageView>> {
    guard::require_owner(&session, UserId::new(path.into_inner()))?;
    Ok(web::Json(PageView {
        flashes: session.take_flashes(),
    }))
}

/// Insert a feedback row owned by the session user.
#[utoipa::path(
    post,
    path = "/user/{id}/feedback/add",
    params(("id" = i64, Path, description = "Profile owner id")),
    request_body(content = FeedbackForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Row created; redirect to the profile"),
        (status = 400, description = "Validation failure", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "addFeedback"
)]
#[post("/user/{id}/feedback/add")]
pub async fn add_feedback_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    form: web::Form<FeedbackForm>,
) -> ApiResult<HttpResponse> {
    let owner = UserId::new(path.into_inner());
    guard::require_owner(&session, owner)?;

    let draft = form.into_inner().into_draft()?;
    state.feedback.insert(NewFeedback { owner, draft }).await?;
    session.flash(FlashLevel::Success, "Feedback Created!");
    Ok(see_other(format!("/user/{owner}")))
}

/// Feedback edit page view.
#[utoipa::path(
    get,
    path = "/feedback/{id}/update",
    params(("id" = i64, Path, description = "Feedback id")),
    responses(
        (status = 200, description = "Edit page", body = FeedbackPageView),
        (status = 303, description = "Not logged in or not the owner; redirect to /login"),
        (status = 404, description = "Feedback missing", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "editFeedbackPage"
)]
#[get("/feedback/{id}/update")]
pub async fn edit_feedback_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<FeedbackPageView>> {
    let feedback = load_feedback(&state, FeedbackId::new(path.into_inner())).await?;
    guard::require_owner(&session, feedback.user_id())?;

    Ok(web::Json(FeedbackPageView {
        feedback: FeedbackView::from(&feedback),
        flashes: session.take_flashes(),
    }))
}

/// Apply title and content from the form to an existing row.
#[utoipa::path(
    post,
    path = "/feedback/{id}/update",
    params(("id" = i64, Path, description = "Feedback id")),
    request_body(content = FeedbackForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Row updated; redirect to the owner profile"),
        (status = 400, description = "Validation failure", body = Error),
        (status = 404, description = "Feedback missing", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "updateFeedback"
)]
#[post("/feedback/{id}/update")]
pub async fn update_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    form: web::Form<FeedbackForm>,
) -> ApiResult<HttpResponse> {
    let id = FeedbackId::new(path.into_inner());
    let feedback = load_feedback(&state, id).await?;
    let owner = guard::require_owner(&session, feedback.user_id())?;

    let draft = form.into_inner().into_draft()?;
    state
        .feedback
        .update(id, draft)
        .await?
        .ok_or_else(|| Error::not_found("feedback not found"))?;
    session.flash(FlashLevel::Success, "Feedback Updated!");
    Ok(see_other(format!("/user/{owner}")))
}

/// Remove a feedback row.
#[utoipa::path(
    post,
    path = "/feedback/{id}/delete",
    params(("id" = i64, Path, description = "Feedback id")),
    responses(
        (status = 303, description = "Row removed; redirect to the owner profile"),
        (status = 404, description = "Feedback missing", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "deleteFeedback"
)]
#[post("/feedback/{id}/delete")]
pub async fn delete_feedback(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = FeedbackId::new(path.into_inner());
    let feedback = load_feedback(&state, id).await?;
    let owner = guard::require_owner(&session, feedback.user_id())?;

    state.feedback.delete(id).await?;
    session.flash(FlashLevel::Info, "Feedback deleted!");
    Ok(see_other(format!("/user/{owner}")))
}
