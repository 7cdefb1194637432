//! Authentication primitives: login credentials and registration payloads.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{EmailAddress, Username};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
    /// First name was missing or blank once trimmed.
    EmptyFirstName,
    /// Last name was missing or blank once trimmed.
    EmptyLastName,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use feedback_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("alice", "pw").unwrap();
/// assert_eq!(creds.username(), "alice");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Clone)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AuthValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(AuthValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration payload for creating an account.
///
/// The password is kept in plain text only until the account service hashes
/// it; the backing buffer is zeroised on drop.
#[derive(Clone)]
pub struct Registration {
    username: Username,
    email: EmailAddress,
    first_name: String,
    last_name: String,
    password: Zeroizing<String>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Registration {
    /// Assemble a registration from already-validated username and email plus
    /// raw password and name fields.
    pub fn try_new(
        username: Username,
        email: EmailAddress,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(AuthValidationError::EmptyFirstName);
        }
        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(AuthValidationError::EmptyLastName);
        }

        Ok(Self {
            username,
            email,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Plain-text password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Split into the parts the account service needs.
    pub(crate) fn into_parts(self) -> (Username, EmailAddress, String, String, Zeroizing<String>) {
        let Self {
            username,
            email,
            first_name,
            last_name,
            password,
        } = self;
        (username, email, first_name, last_name, password)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", AuthValidationError::EmptyUsername)]
    #[case("   ", "pw", AuthValidationError::EmptyUsername)]
    #[case("user", "", AuthValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  alice  ", "secret")]
    #[case("bob", "correct horse battery staple")]
    fn valid_credentials_trim_username(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username(), username.trim());
        assert_eq!(creds.password(), password);
    }

    fn username() -> Username {
        Username::new("alice").expect("valid username")
    }

    fn email() -> EmailAddress {
        EmailAddress::new("a@x.com").expect("valid email")
    }

    #[rstest]
    #[case("", "A", "L", AuthValidationError::EmptyPassword)]
    #[case("pw", "  ", "L", AuthValidationError::EmptyFirstName)]
    #[case("pw", "A", "", AuthValidationError::EmptyLastName)]
    fn invalid_registrations(
        #[case] password: &str,
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = Registration::try_new(username(), email(), first_name, last_name, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn debug_output_redacts_the_password() {
        let creds =
            LoginCredentials::try_from_parts("alice", "hunter2").expect("valid credentials");
        let registration = Registration::try_new(username(), email(), "A", "L", "hunter2")
            .expect("valid registration");
        let rendered = format!("{creds:?} {registration:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    fn registration_trims_names() {
        let registration = Registration::try_new(username(), email(), "  Ada ", " Lovelace ", "pw")
            .expect("valid registration");
        assert_eq!(registration.first_name(), "Ada");
        assert_eq!(registration.last_name(), "Lovelace");
        assert_eq!(registration.password(), "pw");
    }
}
