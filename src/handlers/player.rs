use axum::{extract::State, Json};

use crate::dto::{CharacterStage, PlayerProfileResponse, TitleStatus, TitlesResponse};
use crate::engine::{leveling, quota, titles};
use crate::error::AppResult;
use crate::models::title::{CATALOG, DEFAULT_TITLE_NAME};
use crate::AppState;

pub async fn get_player(State(state): State<AppState>) -> AppResult<Json<PlayerProfileResponse>> {
    let today = state.clock.today();
    let player = state.game.lock().await.player.clone();

    let current_title = titles::current_title(&player).cloned();
    let display_title = current_title
        .as_ref()
        .map_or(DEFAULT_TITLE_NAME, |t| t.name)
        .to_string();

    Ok(Json(PlayerProfileResponse {
        xp_required: leveling::xp_required_for(player.level),
        progress_percent: leveling::progress_percent(player.level, player.xp),
        character_stage: CharacterStage::for_level(player.level),
        daily_quota: quota::quota_status(&player.daily_quests, today),
        current_title,
        display_title,
        today,
        player,
    }))
}

pub async fn list_titles(State(state): State<AppState>) -> AppResult<Json<TitlesResponse>> {
    let game = state.game.lock().await;
    let unlocked = &game.player.titles;

    let statuses = CATALOG
        .iter()
        .map(|t| TitleStatus {
            title: t.clone(),
            unlocked: unlocked.contains(&t.id),
        })
        .collect();

    Ok(Json(TitlesResponse {
        titles: statuses,
        current_title: titles::current_title(&game.player).cloned(),
    }))
}
