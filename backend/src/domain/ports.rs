//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (today a single in-process store; historically a relational database).
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::error::Error;
use super::feedback::{Feedback, FeedbackDraft, FeedbackId, NewFeedback};
use super::user::{NewUser, User, UserId, Username};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// The unique-username constraint was violated on insert.
    #[error("username is already taken")]
    DuplicateUsername,
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<UserPersistenceError> for Error {
    fn from(err: UserPersistenceError) -> Self {
        match err {
            // Registration intercepts this variant before conversion; any
            // other appearance is a conflict the caller did not anticipate.
            UserPersistenceError::DuplicateUsername => Self::conflict(err.to_string()),
            UserPersistenceError::Connection { .. } | UserPersistenceError::Query { .. } => {
                Self::internal(err.to_string())
            }
        }
    }
}

/// Persistence errors raised by [`FeedbackRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackPersistenceError {
    /// Insert referenced a user id that does not exist.
    #[error("feedback owner {owner} does not exist")]
    MissingOwner { owner: UserId },
    /// Repository connection could not be established.
    #[error("feedback repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("feedback repository query failed: {message}")]
    Query { message: String },
}

impl FeedbackPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<FeedbackPersistenceError> for Error {
    fn from(err: FeedbackPersistenceError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Persistence port for user aggregates.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, assigning its surrogate id.
    ///
    /// Fails with [`UserPersistenceError::DuplicateUsername`] when the
    /// username is already present.
    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by unique username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user, cascading to owned feedback. Returns whether a row
    /// existed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}

/// Persistence port for feedback aggregates.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert a new feedback row, assigning its surrogate id.
    async fn insert(&self, new_feedback: NewFeedback) -> Result<Feedback, FeedbackPersistenceError>;

    /// Fetch a feedback row by identifier.
    async fn find_by_id(&self, id: FeedbackId)
    -> Result<Option<Feedback>, FeedbackPersistenceError>;

    /// Replace title and content of an existing row. Returns the updated row
    /// or `None` when it no longer exists.
    async fn update(
        &self,
        id: FeedbackId,
        draft: FeedbackDraft,
    ) -> Result<Option<Feedback>, FeedbackPersistenceError>;

    /// Delete a feedback row. Returns whether a row existed.
    async fn delete(&self, id: FeedbackId) -> Result<bool, FeedbackPersistenceError>;

    /// List all feedback owned by a user, oldest first.
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Feedback>, FeedbackPersistenceError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn duplicate_username_maps_to_conflict() {
        let err: Error = UserPersistenceError::DuplicateUsername.into();
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"))]
    #[case(UserPersistenceError::query("syntax"))]
    fn user_infrastructure_failures_map_to_internal(#[case] source: UserPersistenceError) {
        let err: Error = source.into();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    fn feedback_failures_map_to_internal() {
        let err: Error = FeedbackPersistenceError::MissingOwner {
            owner: UserId::new(9),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
