//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::account::{AccountService, PasswordAccountService};
use crate::domain::ports::{FeedbackRepository, UserRepository};
use crate::outbound::persistence::MemoryStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub users: Arc<dyn UserRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        accounts: Arc<dyn AccountService>,
        users: Arc<dyn UserRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            accounts,
            users,
            feedback,
        }
    }

    /// Wire every port to a fresh shared [`MemoryStore`].
    ///
    /// The store handle is returned alongside so callers (primarily tests)
    /// can assert on row counts directly.
    #[must_use]
    pub fn in_memory() -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let accounts = PasswordAccountService::new(store.clone());
        let state = Self::new(Arc::new(accounts), store.clone(), store.clone());
        (state, store)
    }
}
