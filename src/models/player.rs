use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::quest::{Difficulty, QuestStore};

/// Quests created per difficulty on `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyQuests {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub date: Option<NaiveDate>,
}

impl DailyQuests {
    pub fn zeroed(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn count_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Progression record. Missing fields (including `dailyQuests`) load as defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerState {
    pub level: u32,
    pub xp: u32,
    pub total_completed: u32,
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
    pub last_login_date: Option<NaiveDate>,
    /// Unlocked title ids in unlock order.
    pub titles: Vec<u32>,
    pub daily_quests: DailyQuests,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            total_completed: 0,
            streak: 0,
            last_completed_date: None,
            last_login_date: None,
            titles: Vec::new(),
            daily_quests: DailyQuests::default(),
        }
    }
}

/// Everything the engine reads and writes; persisted together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    pub player: PlayerState,
    pub quests: QuestStore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_daily_quests_is_backfilled() {
        let json = r#"{"level":3,"xp":10,"totalCompleted":7,"streak":2,"titles":[1]}"#;
        let player: PlayerState = serde_json::from_str(json).unwrap();
        assert_eq!(player.level, 3);
        assert_eq!(player.daily_quests, DailyQuests::default());
        assert!(player.last_login_date.is_none());
    }

    #[test]
    fn test_player_round_trips_with_iso_dates() {
        let player = PlayerState {
            level: 4,
            xp: 55,
            total_completed: 12,
            streak: 3,
            last_completed_date: NaiveDate::from_ymd_opt(2026, 5, 2),
            last_login_date: NaiveDate::from_ymd_opt(2026, 5, 3),
            titles: vec![1, 3],
            daily_quests: DailyQuests {
                easy: 1,
                medium: 0,
                hard: 2,
                date: NaiveDate::from_ymd_opt(2026, 5, 3),
            },
        };
        let text = serde_json::to_string(&player).unwrap();
        assert!(text.contains(r#""lastCompletedDate":"2026-05-02""#));
        assert!(text.contains(r#""dailyQuests":{"easy":1,"medium":0,"hard":2,"date":"2026-05-03"}"#));

        let back: PlayerState = serde_json::from_str(&text).unwrap();
        assert_eq!(back, player);
    }
}
