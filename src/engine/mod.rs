//! Progression engine: leveling, streaks, daily quotas, titles and login
//! bonuses. Pure functions over [`GameState`](crate::models::player::GameState);
//! the caller supplies the clock value and persists the result.

pub mod calendar;
pub mod leveling;
pub mod login_bonus;
pub mod quests;
pub mod quota;
pub mod streak;
pub mod titles;

use uuid::Uuid;

use crate::models::quest::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Daily limit of {limit} {difficulty} quests reached")]
    QuotaExceeded { difficulty: Difficulty, limit: u32 },

    #[error("Quest {0} not found")]
    NotFound(Uuid),

    #[error("Quest {0} is already completed")]
    AlreadyCompleted(Uuid),

    #[error("Quest text must not be empty")]
    EmptyQuestText,

    #[error("Deleting a quest requires confirmation")]
    ConfirmationRequired,

    #[error("No login bonus is due today")]
    LoginBonusNotDue,

    #[error("Login bonus is now {due} XP, not the {expected} XP shown")]
    LoginBonusChanged { expected: u32, due: u32 },
}
