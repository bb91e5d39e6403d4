use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tier. Rewards and daily creation limits are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn xp_reward(self) -> u32 {
        match self {
            Self::Easy => 20,
            Self::Medium => 40,
            Self::Hard => 60,
        }
    }

    pub const fn daily_limit(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 5,
            Self::Hard => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: Uuid,
    pub text: String,
    pub difficulty: Difficulty,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Quest {
    pub fn new(text: String, difficulty: Difficulty, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            difficulty,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }

    /// Calendar day of completion in the player's offset.
    pub fn completed_on(&self, offset: FixedOffset) -> Option<NaiveDate> {
        self.completed_at
            .map(|at| at.with_timezone(&offset).date_naive())
    }
}

/// Ordered quest collection, persisted as a single record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestStore(Vec<Quest>);

impl QuestStore {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self(quests)
    }

    pub fn get(&self, id: Uuid) -> Option<&Quest> {
        self.0.iter().find(|q| q.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Quest> {
        self.0.iter_mut().find(|q| q.id == id)
    }

    pub fn push(&mut self, quest: Quest) {
        self.0.push(quest);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Quest> {
        let idx = self.0.iter().position(|q| q.id == id)?;
        Some(self.0.remove(idx))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
