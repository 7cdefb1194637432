//! Form payload parsing and validation.
//!
//! Field declarations and rendering live outside this service; these DTOs
//! validate submitted `application/x-www-form-urlencoded` bodies and map
//! failures to field-level details the form renderer surfaces inline.

use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    AuthValidationError, EmailAddress, Error, FeedbackContent, FeedbackDraft, FeedbackTitle,
    FeedbackValidationError, LoginCredentials, Registration, UserValidationError, Username,
};

/// One field-level validation failure.
struct FieldDetail {
    field: &'static str,
    code: &'static str,
    message: String,
}

fn form_error(fields: Vec<FieldDetail>) -> Error {
    let fields: Vec<_> = fields
        .into_iter()
        .map(|detail| {
            json!({
                "field": detail.field,
                "code": detail.code,
                "message": detail.message,
            })
        })
        .collect();
    Error::invalid_request("form validation failed").with_details(json!({ "fields": fields }))
}

fn required(field: &'static str) -> FieldDetail {
    FieldDetail {
        field,
        code: "required",
        message: format!("{} is required", field.replace('_', " ")),
    }
}

/// Field error raised when registration hits the unique-username constraint.
pub fn username_taken_error() -> Error {
    form_error(vec![FieldDetail {
        field: "username",
        code: "username_taken",
        message: "Username taken.  Please pick another".to_owned(),
    }])
}

/// Field error raised when login credentials do not match any account.
///
/// Deliberately identical for unknown usernames and wrong passwords.
pub fn invalid_credentials_error() -> Error {
    form_error(vec![FieldDetail {
        field: "username",
        code: "invalid_credentials",
        message: "Invalid username/password.".to_owned(),
    }])
}

fn username_detail(err: &UserValidationError) -> FieldDetail {
    match err {
        UserValidationError::EmptyUsername => required("username"),
        UserValidationError::UsernameTooLong { .. } => FieldDetail {
            field: "username",
            code: "too_long",
            message: err.to_string(),
        },
        UserValidationError::UsernameInvalidCharacters => FieldDetail {
            field: "username",
            code: "invalid_characters",
            message: err.to_string(),
        },
        UserValidationError::InvalidEmail => FieldDetail {
            field: "email",
            code: "invalid_email",
            message: err.to_string(),
        },
    }
}

/// Registration form body for `POST /register`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    /// Validate every field, collecting all failures before reporting.
    pub fn into_registration(self) -> Result<Registration, Error> {
        let mut fields = Vec::new();

        let username = match Username::new(&self.username) {
            Ok(username) => Some(username),
            Err(err) => {
                fields.push(username_detail(&err));
                None
            }
        };

        let email = if self.email.trim().is_empty() {
            fields.push(required("email"));
            None
        } else {
            match EmailAddress::new(&self.email) {
                Ok(email) => Some(email),
                Err(err) => {
                    fields.push(FieldDetail {
                        field: "email",
                        code: "invalid_email",
                        message: err.to_string(),
                    });
                    None
                }
            }
        };

        if self.password.is_empty() {
            fields.push(required("password"));
        }
        if self.first_name.trim().is_empty() {
            fields.push(required("first_name"));
        }
        if self.last_name.trim().is_empty() {
            fields.push(required("last_name"));
        }

        match (username, email, fields.is_empty()) {
            (Some(username), Some(email), true) => Registration::try_new(
                username,
                email,
                &self.first_name,
                &self.last_name,
                &self.password,
            )
            .map_err(|err| match err {
                AuthValidationError::EmptyUsername => form_error(vec![required("username")]),
                AuthValidationError::EmptyPassword => form_error(vec![required("password")]),
                AuthValidationError::EmptyFirstName => form_error(vec![required("first_name")]),
                AuthValidationError::EmptyLastName => form_error(vec![required("last_name")]),
            }),
            _ => Err(form_error(fields)),
        }
    }
}

/// Login form body for `POST /login`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the required fields, collecting all failures.
    pub fn into_credentials(self) -> Result<LoginCredentials, Error> {
        let mut fields = Vec::new();
        if self.username.trim().is_empty() {
            fields.push(required("username"));
        }
        if self.password.is_empty() {
            fields.push(required("password"));
        }
        if !fields.is_empty() {
            return Err(form_error(fields));
        }

        LoginCredentials::try_from_parts(&self.username, &self.password).map_err(|err| match err {
            AuthValidationError::EmptyUsername => form_error(vec![required("username")]),
            _ => form_error(vec![required("password")]),
        })
    }
}

/// Feedback form body shared by the add and update endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FeedbackForm {
    pub title: String,
    pub content: String,
}

impl FeedbackForm {
    /// Validate title and content, collecting all failures.
    pub fn into_draft(self) -> Result<FeedbackDraft, Error> {
        let mut fields = Vec::new();

        let title = match FeedbackTitle::new(&self.title) {
            Ok(title) => Some(title),
            Err(FeedbackValidationError::EmptyTitle) => {
                fields.push(required("title"));
                None
            }
            Err(err) => {
                fields.push(FieldDetail {
                    field: "title",
                    code: "too_long",
                    message: err.to_string(),
                });
                None
            }
        };

        let content = match FeedbackContent::new(self.content) {
            Ok(content) => Some(content),
            Err(_) => {
                fields.push(required("content"));
                None
            }
        };

        match (title, content) {
            (Some(title), Some(content)) if fields.is_empty() => {
                Ok(FeedbackDraft { title, content })
            }
            _ => Err(form_error(fields)),
        }
    }
}
