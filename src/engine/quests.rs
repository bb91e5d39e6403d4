//! Quest lifecycle: creation under the daily quota, completion with all of
//! its progression side effects, and deletion.
//!
//! Every operation takes the current [`GameState`] by reference and returns
//! a new one; nothing here touches storage.

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use super::leveling::apply_xp_gain;
use super::quota::{check_quota, reset_daily_quests};
use super::streak::compute_streak;
use super::titles::unlock_titles;
use super::EngineError;
use crate::models::player::{GameState, PlayerState};
use crate::models::quest::{Difficulty, Quest};
use crate::models::title::Title;

#[derive(Debug, Clone)]
pub struct QuestAdded {
    pub state: GameState,
    pub quest: Quest,
}

/// Creates a quest if today's quota for `difficulty` allows it.
pub fn add_quest(
    state: &GameState,
    text: &str,
    difficulty: Difficulty,
    now: DateTime<FixedOffset>,
) -> Result<QuestAdded, EngineError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EngineError::EmptyQuestText);
    }

    let mut daily = reset_daily_quests(&state.player.daily_quests, now.date_naive());
    check_quota(&daily, difficulty)?;
    *daily.count_mut(difficulty) += 1;

    let quest = Quest::new(text.to_string(), difficulty, now.with_timezone(&Utc));
    let mut next = state.clone();
    next.player.daily_quests = daily;
    next.quests.push(quest.clone());

    Ok(QuestAdded { state: next, quest })
}

#[derive(Debug, Clone)]
pub struct QuestCompleted {
    pub state: GameState,
    pub quest: Quest,
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub unlocked_titles: Vec<&'static Title>,
}

/// Marks one quest complete and applies XP, streak, counters and titles.
pub fn complete_quest(
    state: &GameState,
    id: Uuid,
    now: DateTime<FixedOffset>,
) -> Result<QuestCompleted, EngineError> {
    let quest = state.quests.get(id).ok_or(EngineError::NotFound(id))?;
    if quest.completed {
        return Err(EngineError::AlreadyCompleted(id));
    }

    let today = now.date_naive();
    let player = &state.player;
    let xp_gained = quest.difficulty.xp_reward();
    let gain = apply_xp_gain(player.level, player.xp, xp_gained);

    let mut next_player = PlayerState {
        level: gain.level,
        xp: gain.xp,
        total_completed: player.total_completed.saturating_add(1),
        streak: compute_streak(player.last_completed_date, player.streak, today),
        last_completed_date: Some(today),
        last_login_date: player.last_login_date,
        titles: player.titles.clone(),
        daily_quests: reset_daily_quests(&player.daily_quests, today),
    };
    let unlocked_titles = unlock_titles(&mut next_player);

    let mut next = GameState {
        player: next_player,
        quests: state.quests.clone(),
    };
    let completed = next.quests.get_mut(id).ok_or(EngineError::NotFound(id))?;
    completed.completed = true;
    completed.completed_at = Some(now.with_timezone(&Utc));
    let quest = completed.clone();

    Ok(QuestCompleted {
        state: next,
        quest,
        xp_gained,
        leveled_up: gain.leveled_up(),
        unlocked_titles,
    })
}

/// Removes a quest. `confirmed` is the caller's confirmation precondition.
pub fn delete_quest(
    state: &GameState,
    id: Uuid,
    confirmed: bool,
) -> Result<(GameState, Quest), EngineError> {
    if state.quests.get(id).is_none() {
        return Err(EngineError::NotFound(id));
    }
    if !confirmed {
        return Err(EngineError::ConfirmationRequired);
    }

    let mut next = state.clone();
    let removed = next.quests.remove(id).ok_or(EngineError::NotFound(id))?;
    Ok((next, removed))
}
