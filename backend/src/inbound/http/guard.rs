//! Centralized authentication and ownership guard.
//!
//! Handlers touching a user or feedback record call one of these functions
//! instead of duplicating the session/ownership check inline. A rejection
//! queues the user-facing flash here; the HTTP error mapping turns the
//! returned error into a redirect to the login page.

use tracing::debug;

use crate::domain::{Error, UserId};

use super::session::{FlashLevel, SessionContext};

/// Require an authenticated session, yielding the current user id.
pub fn require_login(session: &SessionContext) -> Result<UserId, Error> {
    match session.user_id()? {
        Some(id) => Ok(id),
        None => {
            session.flash(FlashLevel::Danger, "Please login first!");
            Err(Error::unauthorized("login required"))
        }
    }
}

/// Require that the session user owns the resource identified by `owner`.
pub fn require_owner(session: &SessionContext, owner: UserId) -> Result<UserId, Error> {
    let current = require_login(session)?;
    if current == owner {
        Ok(current)
    } else {
        debug!(session_user = %current, owner = %owner, "ownership check failed");
        session.flash(FlashLevel::Danger, "You don't have permission to do that!");
        Err(Error::forbidden("resource owned by another user"))
    }
}
