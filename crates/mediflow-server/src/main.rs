mod auth;
mod dto;
mod error;
mod handlers;
mod state;
#[cfg(test)]
mod testutil;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use mediflow_config::{ClinicRegistry, Settings};
use mediflow_gateway::{ClinicGateway, JamaiClient};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;

/// Legacy chat paths, kept as aliases of the canonical chat handler.
const CHAT_ALIASES: &[&str] = &["/chat/sop", "/chat/pdf", "/chat/faq"];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let settings = Settings::from_env()?;
    let registry = Arc::new(ClinicRegistry::from_settings(&settings)?);

    let client = JamaiClient::new(
        &settings.jamai_api_base,
        &settings.jamai_project_id,
        &settings.jamai_api_key,
        settings.request_timeout,
    )?;
    let gateway = ClinicGateway::new(Arc::new(client), registry);
    let state = Arc::new(AppState::new(settings, gateway));

    let addr = state.settings.bind_addr.clone();
    let app = router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let mut patients = Router::new()
        .route("/chat", post(handlers::patients::chat))
        .route("/appointment", post(handlers::patients::appointment))
        .route("/triage", post(handlers::patients::triage));
    for alias in CHAT_ALIASES {
        patients = patients.route(alias, post(handlers::patients::chat));
    }

    let staff = Router::new()
        .route(
            "/medication-lookup",
            get(handlers::staff::medication_lookup_query).post(handlers::staff::medication_lookup),
        )
        .route("/stock-check", get(handlers::staff::stock_check));

    let api = Router::new()
        .nest("/api/v1/patients", patients)
        .nest("/api/v1/staff", staff)
        .route("/api/v1/clinics", get(handlers::clinics::list))
        .route("/api/v1/clinics/{clinic_id}", get(handlers::clinics::detail))
        .route("/api/v1/shared-tables", get(handlers::staff::shared_tables))
        .route("/api/v1/admin/system-status", get(handlers::staff::system_status))
        .layer(trace_layer);

    Router::new()
        .merge(api)
        .route("/", get(handlers::status))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
