//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting or forgetting the authenticated
//! user id and queueing one-shot flash messages.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const FLASH_KEY: &str = "flash";

/// Severity of a flash message, mirroring the usual alert categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Primary,
    Info,
    Danger,
}

/// One-shot notification shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        self.0
            .get::<UserId>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Remove the authenticated user id, keeping queued flashes intact.
    pub fn forget_user(&self) {
        self.0.remove(USER_ID_KEY);
    }

    /// Destroy the whole session, flashes included.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Queue a flash message for the next rendered page.
    ///
    /// Best effort: a session write failure downgrades the notification to a
    /// log line rather than failing the surrounding request.
    pub fn flash(&self, level: FlashLevel, message: impl Into<String>) {
        let message = message.into();
        let mut pending = self
            .0
            .get::<Vec<Flash>>(FLASH_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        pending.push(Flash { level, message });
        if let Err(error) = self.0.insert(FLASH_KEY, pending) {
            tracing::warn!(error = %error, "failed to queue flash message");
        }
    }

    /// Drain queued flash messages for rendering.
    pub fn take_flashes(&self) -> Vec<Flash> {
        let pending = self
            .0
            .get::<Vec<Flash>>(FLASH_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        if !pending.is_empty() {
            self.0.remove(FLASH_KEY);
        }
        pending
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().wrap(crate::inbound::http::test_utils::test_session_middleware())
    }

    #[actix_web::test]
    async fn round_trips_user_id() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_user(UserId::new(7))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let id = session.user_id()?;
                        Ok::<_, Error>(
                            HttpResponse::Ok().body(id.map(|id| id.to_string()).unwrap_or_default()),
                        )
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "7");
    }

    #[actix_web::test]
    async fn flashes_are_drained_once() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/queue",
                    web::get().to(|session: SessionContext| async move {
                        session.flash(FlashLevel::Info, "Goodbye!");
                        HttpResponse::Ok()
                    }),
                )
                .route(
                    "/drain",
                    web::get().to(|session: SessionContext| async move {
                        web::Json(session.take_flashes())
                    }),
                ),
        )
        .await;

        let queue_res =
            test::call_service(&app, test::TestRequest::get().uri("/queue").to_request()).await;
        let cookie = queue_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let drain_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/drain")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let cookie = drain_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(actix_web::cookie::Cookie::into_owned);
        let flashes: Vec<Flash> = test::read_body_json(drain_res).await;
        assert_eq!(
            flashes,
            vec![Flash {
                level: FlashLevel::Info,
                message: "Goodbye!".to_owned(),
            }]
        );

        let mut second = test::TestRequest::get().uri("/drain");
        if let Some(cookie) = cookie {
            second = second.cookie(cookie);
        }
        let second_res = test::call_service(&app, second.to_request()).await;
        let flashes: Vec<Flash> = test::read_body_json(second_res).await;
        assert!(flashes.is_empty());
    }
}
