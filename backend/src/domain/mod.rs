//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the HTTP adapter
//! and persistence ports. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod account;
pub mod auth;
pub mod error;
pub mod feedback;
pub mod password;
pub mod ports;
pub mod user;

pub use self::account::{AccountService, PasswordAccountService, RegistrationError};
pub use self::auth::{AuthValidationError, LoginCredentials, Registration};
pub use self::error::{Error, ErrorCode};
pub use self::feedback::{
    Feedback, FeedbackContent, FeedbackDraft, FeedbackId, FeedbackTitle, FeedbackValidationError,
    NewFeedback,
};
pub use self::password::{PasswordHashError, PasswordHashString, hash_password, verify_password};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserValidationError, Username};
