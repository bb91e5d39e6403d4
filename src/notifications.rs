//! Transient notifications for the presentation layer.
//!
//! The engine never reads this queue. Entries carry a display hint only; when
//! the client dismisses a banner has no bearing on game state.

use std::{collections::VecDeque, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use crate::models::quest::Difficulty;
use crate::models::title::Title;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Notification {
    QuestAdded { quest_id: Uuid, difficulty: Difficulty },
    LevelUp { level: u32 },
    TitleUnlocked { title_id: u32, name: String },
    LoginBonus { xp: u32 },
}

impl Notification {
    pub fn title_unlocked(title: &Title) -> Self {
        Self::TitleUnlocked {
            title_id: title.id,
            name: title.name.to_string(),
        }
    }

    pub fn display_ms(&self) -> u64 {
        match self {
            Self::QuestAdded { .. } | Self::LevelUp { .. } => 2000,
            Self::TitleUnlocked { .. } | Self::LoginBonus { .. } => 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub seq: u64,
    pub issued_at: DateTime<Utc>,
    pub display_ms: u64,
    #[serde(flatten)]
    pub notification: Notification,
}

struct Inner {
    pending: VecDeque<Envelope>,
    next_seq: u64,
}

/// Bounded queue of pending notifications, mirrored to websocket subscribers.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<Inner>>,
    capacity: usize,
    tx: broadcast::Sender<String>,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _) = broadcast::channel(capacity);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                pending: VecDeque::with_capacity(capacity),
                next_seq: 1,
            })),
            capacity,
            tx,
        }
    }

    pub async fn push(&self, notification: Notification) {
        let mut inner = self.inner.lock().await;
        let envelope = Envelope {
            seq: inner.next_seq,
            issued_at: Utc::now(),
            display_ms: notification.display_ms(),
            notification,
        };
        inner.next_seq += 1;

        if inner.pending.len() == self.capacity {
            inner.pending.pop_front();
        }

        // no subscribers is fine
        if let Ok(msg) = serde_json::to_string(&envelope) {
            let _ = self.tx.send(msg);
        }
        inner.pending.push_back(envelope);
    }

    pub async fn drain(&self) -> Vec<Envelope> {
        self.inner.lock().await.pending.drain(..).collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}
