use axum::{extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use super::commit;
use crate::dto::{
    Committed, CompleteQuestResponse, CreateQuestRequest, DeleteQuestQuery, DeleteResponse,
    ListQuestsQuery, QuestResponse, QuestStatusFilter,
};
use crate::engine::{self, EngineError};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::quest::Quest;
use crate::notifications::Notification;
use crate::AppState;

pub async fn list_quests(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuestsQuery>,
) -> AppResult<Json<Vec<Quest>>> {
    let game = state.game.lock().await;
    let quests = game
        .quests
        .iter()
        .filter(|q| match query.status {
            QuestStatusFilter::Active => !q.completed,
            QuestStatusFilter::Completed => q.completed,
            QuestStatusFilter::All => true,
        })
        .cloned()
        .collect();

    Ok(Json(quests))
}

pub async fn create_quest(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateQuestRequest>,
) -> AppResult<Json<Committed<QuestResponse>>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut game = state.game.lock().await;
    let added = match engine::quests::add_quest(&game, &body.text, body.difficulty, state.clock.now()) {
        Ok(added) => added,
        Err(e @ EngineError::QuotaExceeded { .. }) => {
            tracing::info!(difficulty = %body.difficulty, "Daily quest quota reached");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let quest = added.quest;
    let warning = commit(&state, &mut game, added.state).await;
    drop(game);

    tracing::info!(quest_id = %quest.id, difficulty = %quest.difficulty, "Quest added");
    state
        .notifications
        .push(Notification::QuestAdded {
            quest_id: quest.id,
            difficulty: quest.difficulty,
        })
        .await;

    Ok(Json(Committed {
        data: QuestResponse { quest },
        warning,
    }))
}

pub async fn complete_quest(
    State(state): State<AppState>,
    AppPath(quest_id): AppPath<Uuid>,
) -> AppResult<Json<Committed<CompleteQuestResponse>>> {
    let mut game = state.game.lock().await;
    let done = engine::quests::complete_quest(&game, quest_id, state.clock.now())?;

    let player = done.state.player.clone();
    let warning = commit(&state, &mut game, done.state).await;
    drop(game);

    tracing::info!(
        quest_id = %quest_id,
        xp_gained = done.xp_gained,
        level = player.level,
        streak = player.streak,
        "Quest completed"
    );

    if done.leveled_up {
        tracing::info!(level = player.level, "Level up");
        state
            .notifications
            .push(Notification::LevelUp { level: player.level })
            .await;
    }

    if !done.unlocked_titles.is_empty() {
        let ids: Vec<u32> = done.unlocked_titles.iter().map(|t| t.id).collect();
        tracing::info!(titles = ?ids, "Titles unlocked");
    }
    // only the first title of an event is announced; the rest appear in the title list
    if let Some(first) = done.unlocked_titles.first() {
        state
            .notifications
            .push(Notification::title_unlocked(first))
            .await;
    }

    Ok(Json(Committed {
        data: CompleteQuestResponse {
            quest: done.quest,
            player,
            xp_gained: done.xp_gained,
            leveled_up: done.leveled_up,
            unlocked_titles: done.unlocked_titles.into_iter().cloned().collect(),
        },
        warning,
    }))
}

pub async fn delete_quest(
    State(state): State<AppState>,
    AppPath(quest_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<DeleteQuestQuery>,
) -> AppResult<Json<Committed<DeleteResponse>>> {
    let mut game = state.game.lock().await;
    let (next, removed) = engine::quests::delete_quest(&game, quest_id, query.confirm)?;
    let warning = commit(&state, &mut game, next).await;

    tracing::info!(quest_id = %removed.id, "Quest deleted");

    Ok(Json(Committed {
        data: DeleteResponse {
            deleted: true,
            id: removed.id,
        },
        warning,
    }))
}
