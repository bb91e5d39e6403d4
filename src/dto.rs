//! # QuestLog — Request/Response DTOs
//!
//! Conventions:
//! - `*Request` / `*Query` → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Every response, and the persisted models (`Quest`, `PlayerState`) returned
//!   as-is, use camelCase keys
//! - Mutating responses are wrapped in [`Committed`] so a failed save can be
//!   reported without failing the request

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::quota::QuotaStatus;
use crate::models::player::PlayerState;
use crate::models::quest::{Difficulty, Quest};
use crate::models::title::Title;

// ============================================================================
// Common
// ============================================================================

/// Response body of a mutating call. `warning` is set when the new state is
/// live in memory but could not be saved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Committed<T: Serialize> {
    #[serde(flatten)]
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// ============================================================================
// Quests
// ============================================================================

/// POST /api/quests
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestRequest {
    #[validate(length(min = 1, message = "Quest text must not be empty"))]
    pub text: String,

    /// Default: "medium"
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatusFilter {
    Active,
    Completed,
    #[default]
    All,
}

/// GET /api/quests
#[derive(Debug, Default, Deserialize)]
pub struct ListQuestsQuery {
    #[serde(default)]
    pub status: QuestStatusFilter,
}

/// DELETE /api/quests/{id}
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuestQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestResponse {
    pub quest: Quest,
}

/// POST /api/quests/{id}/complete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuestResponse {
    pub quest: Quest,
    pub player: PlayerState,
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub unlocked_titles: Vec<Title>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: uuid::Uuid,
}

// ============================================================================
// Player & titles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStage {
    Squire,
    Guardian,
    Knight,
    Sage,
    Hero,
}

impl CharacterStage {
    pub fn for_level(level: u32) -> Self {
        match level {
            20.. => Self::Hero,
            15..=19 => Self::Sage,
            10..=14 => Self::Knight,
            5..=9 => Self::Guardian,
            _ => Self::Squire,
        }
    }
}

/// GET /api/player
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfileResponse {
    #[serde(flatten)]
    pub player: PlayerState,
    pub xp_required: u32,
    pub progress_percent: u32,
    pub current_title: Option<Title>,
    pub display_title: String,
    pub character_stage: CharacterStage,
    pub daily_quota: Vec<QuotaStatus>,
    pub today: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStatus {
    #[serde(flatten)]
    pub title: Title,
    pub unlocked: bool,
}

/// GET /api/titles
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlesResponse {
    pub titles: Vec<TitleStatus>,
    pub current_title: Option<Title>,
}

// ============================================================================
// Login bonus
// ============================================================================

/// GET /api/login-bonus
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBonusStatusResponse {
    pub due: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    pub streak: u32,
}

/// POST /api/login-bonus/claim
#[derive(Debug, Default, Deserialize)]
pub struct ClaimLoginBonusQuery {
    /// Amount shown by the status check. Omitted: grant whatever is due.
    pub xp: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBonusClaimResponse {
    pub xp_granted: u32,
    pub leveled_up: bool,
    pub player: PlayerState,
}

// ============================================================================
// Calendar
// ============================================================================

/// GET /api/calendar
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /api/calendar/{date}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayQuestsResponse {
    pub date: NaiveDate,
    pub quests: Vec<Quest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_to_medium() {
        let req: CreateQuestRequest = serde_json::from_str(r#"{"text":"Call mom"}"#).unwrap();
        assert_eq!(req.difficulty, Difficulty::Medium);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_accepts_long_text() {
        let req = CreateQuestRequest {
            text: "x".repeat(1000),
            difficulty: Difficulty::Easy,
        };
        assert!(req.validate().is_ok());

        let empty = CreateQuestRequest {
            text: String::new(),
            difficulty: Difficulty::Easy,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_unknown_difficulty_fails() {
        let result = serde_json::from_str::<CreateQuestRequest>(r#"{"text":"a","difficulty":"epic"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_character_stage_thresholds() {
        assert_eq!(CharacterStage::for_level(1), CharacterStage::Squire);
        assert_eq!(CharacterStage::for_level(5), CharacterStage::Guardian);
        assert_eq!(CharacterStage::for_level(14), CharacterStage::Knight);
        assert_eq!(CharacterStage::for_level(15), CharacterStage::Sage);
        assert_eq!(CharacterStage::for_level(99), CharacterStage::Hero);
    }

    #[test]
    fn test_committed_omits_empty_warning() {
        let body = Committed {
            data: DeleteResponse {
                deleted: true,
                id: uuid::Uuid::nil(),
            },
            warning: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["deleted"], true);
        assert!(json.get("warning").is_none());
    }

    #[test]
    fn test_profile_keys_are_camel_case() {
        let profile = PlayerProfileResponse {
            player: PlayerState::default(),
            xp_required: 100,
            progress_percent: 0,
            current_title: None,
            display_title: "Adventurer".into(),
            character_stage: CharacterStage::Squire,
            daily_quota: Vec::new(),
            today: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert!(keys.iter().all(|k| !k.contains('_')), "snake_case key in {keys:?}");
        assert_eq!(json["xpRequired"], 100);
        assert_eq!(json["characterStage"], "squire");
        assert!(json.get("dailyQuests").is_some());
    }
}
