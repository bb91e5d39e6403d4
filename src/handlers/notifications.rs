use axum::{extract::State, Json};

use crate::notifications::Envelope;
use crate::AppState;

/// Hands over every pending notification and clears the queue.
pub async fn drain_notifications(State(state): State<AppState>) -> Json<Vec<Envelope>> {
    Json(state.notifications.drain().await)
}
