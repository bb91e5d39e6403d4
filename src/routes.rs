use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::handlers;
use crate::AppState;

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origins = std::iter::once(&config.frontend_url)
        .chain(&config.cors_extra_origins)
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin {o:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

pub fn router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    let api = Router::new()
        // Quests
        .route(
            "/api/quests",
            get(handlers::quests::list_quests).post(handlers::quests::create_quest),
        )
        .route("/api/quests/:id", delete(handlers::quests::delete_quest))
        .route(
            "/api/quests/:id/complete",
            post(handlers::quests::complete_quest),
        )
        // Player & titles
        .route("/api/player", get(handlers::player::get_player))
        .route("/api/titles", get(handlers::player::list_titles))
        // Login bonus
        .route(
            "/api/login-bonus",
            get(handlers::login_bonus::check_login_bonus),
        )
        .route(
            "/api/login-bonus/claim",
            post(handlers::login_bonus::claim_login_bonus),
        )
        // Calendar
        .route("/api/calendar", get(handlers::calendar::month))
        .route(
            "/api/calendar/:date",
            get(handlers::calendar::quests_on_date),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(handlers::notifications::drain_notifications),
        );

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/ws", get(handlers::ws::ws_handler))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
        .with_state(state);

    Ok(app)
}
