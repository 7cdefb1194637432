//! Driving port for account use-cases: registration, authentication, and
//! account deletion.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it
//! without knowing (or importing) the backing infrastructure, which keeps
//! HTTP handler tests deterministic because they can substitute a test
//! double instead of wiring persistence.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use super::auth::{LoginCredentials, Registration};
use super::error::Error;
use super::password::{hash_password, verify_password};
use super::ports::{UserPersistenceError, UserRepository};
use super::user::{NewUser, User, UserId};

/// Failure modes of [`AccountService::register`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The requested username already exists. Recoverable: callers surface
    /// this as a field-level form error.
    #[error("username is already taken")]
    UsernameTaken,
    /// Any other failure while hashing or persisting.
    #[error(transparent)]
    Other(#[from] Error),
}

/// Domain use-case port for account lifecycle operations.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Hash the password and persist a new user.
    async fn register(&self, registration: Registration) -> Result<User, RegistrationError>;

    /// Look up the user by username and verify the password hash.
    ///
    /// Returns `Ok(None)` for both "unknown user" and "wrong password" so
    /// responses cannot be used to probe for registered usernames.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error>;

    /// Delete the user; the repository cascades to owned feedback. Returns
    /// whether a row existed.
    async fn delete_account(&self, id: UserId) -> Result<bool, Error>;
}

/// [`AccountService`] implementation over a [`UserRepository`] with Argon2
/// password hashing.
#[derive(Clone)]
pub struct PasswordAccountService {
    users: Arc<dyn UserRepository>,
}

impl PasswordAccountService {
    /// Create a new service backed by the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountService for PasswordAccountService {
    async fn register(&self, registration: Registration) -> Result<User, RegistrationError> {
        let (username, email, first_name, last_name, password) = registration.into_parts();
        let password_hash = hash_password(&password)
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        drop(password);

        let new_user = NewUser {
            username,
            email,
            first_name,
            last_name,
            password_hash,
        };
        match self.users.insert(new_user).await {
            Ok(user) => {
                debug!(user_id = %user.id(), "registered new user");
                Ok(user)
            }
            Err(UserPersistenceError::DuplicateUsername) => Err(RegistrationError::UsernameTaken),
            Err(err) => Err(RegistrationError::Other(err.into())),
        }
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error> {
        let username = match crate::domain::Username::new(credentials.username()) {
            Ok(username) => username,
            // A name that cannot exist in storage is simply not a match.
            Err(_) => return Ok(None),
        };

        let Some(user) = self.users.find_by_username(&username).await? else {
            return Ok(None);
        };

        match verify_password(user.password_hash(), credentials.password()) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(err) => {
                warn!(user_id = %user.id(), error = %err, "stored password hash unusable");
                Ok(None)
            }
        }
    }

    async fn delete_account(&self, id: UserId) -> Result<bool, Error> {
        let deleted = self.users.delete(id).await?;
        if deleted {
            debug!(user_id = %id, "deleted account");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{EmailAddress, Username};
    use crate::outbound::persistence::MemoryStore;
    use rstest::{fixture, rstest};

    fn registration(username: &str) -> Registration {
        Registration::try_new(
            Username::new(username).expect("valid username"),
            EmailAddress::new("a@x.com").expect("valid email"),
            "A",
            "L",
            "pw",
        )
        .expect("valid registration")
    }

    #[fixture]
    fn service() -> (PasswordAccountService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (PasswordAccountService::new(store.clone()), store)
    }

    #[rstest]
    #[actix_web::test]
    async fn register_persists_a_hashed_password(service: (PasswordAccountService, Arc<MemoryStore>)) {
        let (service, _store) = service;
        let user = service
            .register(registration("alice"))
            .await
            .expect("registration succeeds");

        assert_eq!(user.id(), UserId::new(1));
        assert_ne!(user.password_hash().as_str(), "pw");
        assert!(user.password_hash().as_str().starts_with("$argon2"));
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_username_is_recoverable(service: (PasswordAccountService, Arc<MemoryStore>)) {
        let (service, store) = service;
        service
            .register(registration("alice"))
            .await
            .expect("first registration succeeds");

        let err = service
            .register(registration("alice"))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err, RegistrationError::UsernameTaken);
        assert_eq!(store.user_count(), 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn authenticate_hides_the_failure_reason(service: (PasswordAccountService, Arc<MemoryStore>)) {
        let (service, _store) = service;
        service
            .register(registration("alice"))
            .await
            .expect("registration succeeds");

        let unknown = LoginCredentials::try_from_parts("nobody", "pw").expect("credentials shape");
        let wrong = LoginCredentials::try_from_parts("alice", "wrong").expect("credentials shape");
        assert_eq!(service.authenticate(&unknown).await.expect("lookup"), None);
        assert_eq!(service.authenticate(&wrong).await.expect("lookup"), None);
    }

    #[rstest]
    #[actix_web::test]
    async fn authenticate_returns_the_matching_user(service: (PasswordAccountService, Arc<MemoryStore>)) {
        let (service, _store) = service;
        let registered = service
            .register(registration("alice"))
            .await
            .expect("registration succeeds");

        let creds = LoginCredentials::try_from_parts("alice", "pw").expect("credentials shape");
        let user = service
            .authenticate(&creds)
            .await
            .expect("lookup")
            .expect("credentials match");
        assert_eq!(user.id(), registered.id());
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_account_reports_row_existence(service: (PasswordAccountService, Arc<MemoryStore>)) {
        let (service, _store) = service;
        let user = service
            .register(registration("alice"))
            .await
            .expect("registration succeeds");

        assert!(service.delete_account(user.id()).await.expect("delete"));
        assert!(!service.delete_account(user.id()).await.expect("delete"));
    }
}
