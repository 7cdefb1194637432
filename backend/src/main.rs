//! Backend entry-point: wires session middleware, application routes, and
//! health probes.

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use feedback_backend::RequestId;
use feedback_backend::inbound::http::health::{HealthState, live, ready};
use feedback_backend::inbound::http::state::HttpState;
use feedback_backend::inbound::http::{self, session_config};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = session_config::session_settings_from_env();
    let (state, _store) = HttpState::in_memory();
    let state = web::Data::new(state);

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .wrap(RequestId)
            .wrap(session_config::session_middleware(&settings))
            .configure(http::configure)
            .service(ready)
            .service(live)
    })
    .bind(("0.0.0.0", 8080))?;

    health_state.mark_ready();
    server.run().await
}
