//! In-memory implementation of the user and feedback repository ports.
//!
//! Mirrors the constraints the storage layer owns in the data model: the
//! unique-username index and the cascade from user deletion to owned
//! feedback. Ids are monotonic surrogates starting at 1.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    FeedbackPersistenceError, FeedbackRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Feedback, FeedbackDraft, FeedbackId, NewFeedback, NewUser, User, UserId, Username,
};

#[derive(Debug)]
struct StoreInner {
    next_user_id: i64,
    next_feedback_id: i64,
    users: BTreeMap<i64, User>,
    feedback: BTreeMap<i64, Feedback>,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            next_user_id: 1,
            next_feedback_id: 1,
            users: BTreeMap::new(),
            feedback: BTreeMap::new(),
        }
    }
}

/// Shared in-process store backing both repository ports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users. Exposed for test assertions.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.users.len()).unwrap_or(0)
    }

    /// Number of stored feedback rows. Exposed for test assertions.
    #[must_use]
    pub fn feedback_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.feedback.len())
            .unwrap_or(0)
    }

    fn lock_users(&self) -> Result<std::sync::MutexGuard<'_, StoreInner>, UserPersistenceError> {
        self.inner
            .lock()
            .map_err(|_| UserPersistenceError::connection("store mutex poisoned"))
    }

    fn lock_feedback(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, StoreInner>, FeedbackPersistenceError> {
        self.inner
            .lock()
            .map_err(|_| FeedbackPersistenceError::connection("store mutex poisoned"))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let mut inner = self.lock_users()?;
        if inner
            .users
            .values()
            .any(|user| user.username() == &new_user.username)
        {
            return Err(UserPersistenceError::DuplicateUsername);
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User::new(UserId::new(id), new_user);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let inner = self.lock_users()?;
        Ok(inner.users.get(&id.get()).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let inner = self.lock_users()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut inner = self.lock_users()?;
        let existed = inner.users.remove(&id.get()).is_some();
        if existed {
            // Cascade: owned feedback goes with the user.
            inner.feedback.retain(|_, feedback| feedback.user_id() != id);
        }
        Ok(existed)
    }
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn insert(
        &self,
        new_feedback: NewFeedback,
    ) -> Result<Feedback, FeedbackPersistenceError> {
        let mut inner = self.lock_feedback()?;
        let NewFeedback { owner, draft } = new_feedback;
        if !inner.users.contains_key(&owner.get()) {
            return Err(FeedbackPersistenceError::MissingOwner { owner });
        }

        let id = inner.next_feedback_id;
        inner.next_feedback_id += 1;
        let feedback = Feedback::new(FeedbackId::new(id), owner, draft);
        inner.feedback.insert(id, feedback.clone());
        Ok(feedback)
    }

    async fn find_by_id(
        &self,
        id: FeedbackId,
    ) -> Result<Option<Feedback>, FeedbackPersistenceError> {
        let inner = self.lock_feedback()?;
        Ok(inner.feedback.get(&id.get()).cloned())
    }

    async fn update(
        &self,
        id: FeedbackId,
        draft: FeedbackDraft,
    ) -> Result<Option<Feedback>, FeedbackPersistenceError> {
        let mut inner = self.lock_feedback()?;
        Ok(inner.feedback.get_mut(&id.get()).map(|feedback| {
            feedback.apply(draft);
            feedback.clone()
        }))
    }

    async fn delete(&self, id: FeedbackId) -> Result<bool, FeedbackPersistenceError> {
        let mut inner = self.lock_feedback()?;
        Ok(inner.feedback.remove(&id.get()).is_some())
    }

    async fn list_for_user(
        &self,
        owner: UserId,
    ) -> Result<Vec<Feedback>, FeedbackPersistenceError> {
        let inner = self.lock_feedback()?;
        Ok(inner
            .feedback
            .values()
            .filter(|feedback| feedback.user_id() == owner)
            .cloned()
            .collect())
    }
}
