//! View models returned by GET endpoints.
//!
//! Rendering is an external collaborator: handlers emit these JSON payloads
//! and the presentation layer decides what a page looks like. Keeping the
//! DTOs here also guarantees the stored password hash never reaches a
//! response body.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Feedback, FeedbackId, User, UserId};

use super::session::Flash;

/// Minimal page payload: pending flash messages only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageView {
    pub flashes: Vec<Flash>,
}

/// Public projection of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
        }
    }
}

/// Public projection of a [`Feedback`] row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeedbackView {
    pub id: FeedbackId,
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

impl From<&Feedback> for FeedbackView {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id(),
            title: feedback.title().as_str().to_owned(),
            content: feedback.content().as_str().to_owned(),
            user_id: feedback.user_id(),
        }
    }
}

/// Profile page payload: the user, their feedback, and pending flashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileView {
    pub user: UserView,
    pub feedback: Vec<FeedbackView>,
    pub flashes: Vec<Flash>,
}

/// Edit page payload for a single feedback row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FeedbackPageView {
    pub feedback: FeedbackView,
    pub flashes: Vec<Flash>,
}
