//! User profile handlers.
//!
//! ```text
//! GET  /user/{id}         owner-only profile view
//! POST /user/{id}/delete  delete the account and cascade feedback
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::{Error, UserId};

use super::ApiResult;
use super::guard;
use super::see_other;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{FeedbackView, ProfileView, UserView};

/// Show a user's profile with their feedback posts.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile page", body = ProfileView),
        (status = 303, description = "Not logged in or not the owner; redirect to /login"),
        (status = 404, description = "User missing", body = Error)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/user/{id}")]
pub async fn show_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ProfileView>> {
    let id = UserId::new(path.into_inner());
    guard::require_owner(&session, id)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("user not found"))?;
    let feedback = state.feedback.list_for_user(id).await?;

    Ok(web::Json(ProfileView {
        user: UserView::from(&user),
        feedback: feedback.iter().map(FeedbackView::from).collect(),
        flashes: session.take_flashes(),
    }))
}

/// Delete the account, cascading to feedback, and destroy the session.
#[utoipa::path(
    post,
    path = "/user/{id}/delete",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 303, description = "Account removed; redirect to /register"),
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[post("/user/{id}/delete")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    guard::require_owner(&session, id)?;

    state.accounts.delete_account(id).await?;
    session.purge();
    info!(user_id = %id, "account deleted");
    Ok(see_other("/register"))
}
