pub mod calendar;
pub mod health;
pub mod login_bonus;
pub mod notifications;
pub mod player;
pub mod quests;
pub mod ws;

use crate::models::player::GameState;
use crate::AppState;

const UNSAVED_WARNING: &str =
    "Progress could not be saved and may be lost on restart; the next successful action will save it";

/// Makes `next` the live state and persists it. A failed save keeps the new
/// state in memory and is reported as a warning instead of an error.
pub(crate) async fn commit(state: &AppState, game: &mut GameState, next: GameState) -> Option<String> {
    *game = next;
    match state.repo.save(game).await {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to persist game state");
            Some(UNSAVED_WARNING.into())
        }
    }
}
