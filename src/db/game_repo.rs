use serde::de::DeserializeOwned;

use super::kv::KvStore;
use super::StoreError;
use crate::models::player::{GameState, PlayerState};
use crate::models::quest::QuestStore;

/// Loads and saves the quest collection and player record as one unit.
#[derive(Clone)]
pub struct GameRepo {
    store: KvStore,
    quests_key: String,
    player_key: String,
}

impl GameRepo {
    pub fn new(store: KvStore, quests_key: impl Into<String>, player_key: impl Into<String>) -> Self {
        Self {
            store,
            quests_key: quests_key.into(),
            player_key: player_key.into(),
        }
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Missing or unreadable records load as their defaults.
    pub async fn load(&self) -> Result<GameState, StoreError> {
        let quests: QuestStore = self.load_record(&self.quests_key).await?;
        let player: PlayerState = self.load_record(&self.player_key).await?;
        Ok(GameState { player, quests })
    }

    pub async fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let quests = serde_json::to_string(&state.quests)?;
        let player = serde_json::to_string(&state.player)?;
        self.store
            .put_many(&[(self.quests_key.as_str(), quests), (self.player_key.as_str(), player)])
            .await
    }

    async fn load_record<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        let Some(text) = self.store.get(key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Unreadable record, starting fresh");
                Ok(T::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quest::{Difficulty, Quest};
    use chrono::Utc;

    fn repo(store: KvStore) -> GameRepo {
        GameRepo::new(store, "quests", "player")
    }

    #[tokio::test]
    async fn test_empty_store_loads_defaults() {
        let state = repo(KvStore::memory()).load().await.unwrap();
        assert_eq!(state, GameState::default());
        assert_eq!(state.player.level, 1);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let repo = repo(KvStore::memory());
        let mut state = GameState::default();
        state.player.xp = 40;
        state.player.titles = vec![1];
        state
            .quests
            .push(Quest::new("Stretch".into(), Difficulty::Easy, Utc::now()));

        repo.save(&state).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn test_legacy_player_without_daily_quests() {
        let store = KvStore::memory();
        store
            .put_many(&[("player", r#"{"level":2,"xp":10,"totalCompleted":3,"streak":1,"titles":[1]}"#.into())])
            .await
            .unwrap();

        let state = repo(store).load().await.unwrap();
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.daily_quests.date, None);
        assert!(state.quests.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_record_starts_fresh() {
        let store = KvStore::memory();
        store
            .put_many(&[("quests", "not json".into())])
            .await
            .unwrap();
        let state = repo(store).load().await.unwrap();
        assert!(state.quests.is_empty());
    }
}
