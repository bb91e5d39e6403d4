use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "questlog-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 503 with the `persistence_failure` envelope when the store cannot be reached.
pub async fn readyz(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let store = state.repo.store();
    let backend = store.backend_name();

    store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, backend, "Readiness check failed");
        e
    })?;

    Ok(Json(json!({
        "status": "ready",
        "checks": { "store": "ok", "backend": backend },
    })))
}
