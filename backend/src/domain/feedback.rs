//! Feedback data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// Validation errors returned by the feedback value-type constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyContent,
}

impl fmt::Display for FeedbackValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl std::error::Error for FeedbackValidationError {}

/// Surrogate feedback identifier assigned by the storage layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum allowed length for a feedback title.
pub const TITLE_MAX: usize = 100;

/// Short headline for a feedback post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct FeedbackTitle(String);

impl FeedbackTitle {
    /// Validate and construct a [`FeedbackTitle`].
    ///
    /// # Examples
    /// ```
    /// use feedback_backend::domain::FeedbackTitle;
    ///
    /// let title = FeedbackTitle::new(" Great walk ").expect("valid title");
    /// assert_eq!(title.as_str(), "Great walk");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FeedbackValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FeedbackValidationError::EmptyTitle);
        }
        if trimmed.chars().count() > TITLE_MAX {
            return Err(FeedbackValidationError::TitleTooLong { max: TITLE_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the title as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FeedbackTitle> for String {
    fn from(value: FeedbackTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for FeedbackTitle {
    type Error = FeedbackValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Body text of a feedback post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct FeedbackContent(String);

impl FeedbackContent {
    /// Validate and construct [`FeedbackContent`].
    pub fn new(raw: impl Into<String>) -> Result<Self, FeedbackValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(FeedbackValidationError::EmptyContent);
        }
        Ok(Self(raw))
    }

    /// Borrow the content as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FeedbackContent> for String {
    fn from(value: FeedbackContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for FeedbackContent {
    type Error = FeedbackValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Title and content pair used for inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub title: FeedbackTitle,
    pub content: FeedbackContent,
}

/// Insert payload for [`super::ports::FeedbackRepository::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub owner: UserId,
    pub draft: FeedbackDraft,
}

/// Feedback aggregate owned by a single user.
///
/// ## Invariants
/// - `user_id` references an existing user; the storage layer cascades
///   feedback deletion when the owner is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    id: FeedbackId,
    title: FeedbackTitle,
    content: FeedbackContent,
    user_id: UserId,
}

impl Feedback {
    /// Assemble a feedback row from already-validated parts.
    pub fn new(id: FeedbackId, owner: UserId, draft: FeedbackDraft) -> Self {
        let FeedbackDraft { title, content } = draft;
        Self {
            id,
            title,
            content,
            user_id: owner,
        }
    }

    /// Stable identifier assigned by the storage layer.
    pub fn id(&self) -> FeedbackId {
        self.id
    }

    /// Post headline.
    pub fn title(&self) -> &FeedbackTitle {
        &self.title
    }

    /// Post body.
    pub fn content(&self) -> &FeedbackContent {
        &self.content
    }

    /// Owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Apply an edit, replacing title and content.
    pub fn apply(&mut self, draft: FeedbackDraft) {
        let FeedbackDraft { title, content } = draft;
        self.title = title;
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", FeedbackValidationError::EmptyTitle)]
    #[case("   ", FeedbackValidationError::EmptyTitle)]
    fn title_rejects_blank(#[case] raw: &str, #[case] expected: FeedbackValidationError) {
        let err = FeedbackTitle::new(raw).expect_err("blank title must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn title_rejects_over_long_input() {
        let raw = "x".repeat(TITLE_MAX + 1);
        let err = FeedbackTitle::new(raw).expect_err("over-long title must fail");
        assert_eq!(err, FeedbackValidationError::TitleTooLong { max: TITLE_MAX });
    }

    #[rstest]
    fn content_rejects_blank() {
        let err = FeedbackContent::new("  \n ").expect_err("blank content must fail");
        assert_eq!(err, FeedbackValidationError::EmptyContent);
    }

    #[rstest]
    fn apply_replaces_title_and_content() {
        let draft = FeedbackDraft {
            title: FeedbackTitle::new("before").expect("valid title"),
            content: FeedbackContent::new("old body").expect("valid content"),
        };
        let mut feedback = Feedback::new(FeedbackId::new(1), UserId::new(7), draft);

        feedback.apply(FeedbackDraft {
            title: FeedbackTitle::new("after").expect("valid title"),
            content: FeedbackContent::new("new body").expect("valid content"),
        });

        assert_eq!(feedback.title().as_str(), "after");
        assert_eq!(feedback.content().as_str(), "new body");
        assert_eq!(feedback.user_id(), UserId::new(7));
    }
}
