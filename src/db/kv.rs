use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use sqlx::PgPool;
use tokio::sync::Mutex;

use super::StoreError;

/// Thin key-value store holding serialized records.
#[derive(Clone)]
pub enum KvStore {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl KvStore {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::default())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Postgres(db) => {
                let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = $1")
                    .bind(key)
                    .fetch_optional(db)
                    .await?;
                Ok(value)
            }
            Self::Memory(mem) => Ok(mem.entries.lock().await.get(key).cloned()),
        }
    }

    /// Writes all entries or none of them.
    pub async fn put_many(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        match self {
            Self::Postgres(db) => {
                let mut tx = db.begin().await?;
                for (key, value) in entries {
                    sqlx::query(
                        r#"
                        INSERT INTO kv_store (key, value)
                        VALUES ($1, $2)
                        ON CONFLICT (key) DO UPDATE SET
                            value = EXCLUDED.value,
                            updated_at = NOW()
                        "#,
                    )
                    .bind(*key)
                    .bind(value.as_str())
                    .execute(&mut *tx)
                    .await?;
                }
                tx.commit().await?;
                Ok(())
            }
            Self::Memory(mem) => {
                if mem.fail_writes.load(Ordering::SeqCst) {
                    return Err(StoreError::Unavailable("writes disabled".into()));
                }
                let mut map = mem.entries.lock().await;
                for (key, value) in entries {
                    map.insert((*key).to_string(), value.clone());
                }
                Ok(())
            }
        }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        match self {
            Self::Postgres(db) => {
                sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(db).await?;
                Ok(())
            }
            Self::Memory(mem) => {
                if mem.fail_writes.load(Ordering::SeqCst) {
                    return Err(StoreError::Unavailable("writes disabled".into()));
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

#[cfg(test)]
impl MemoryStore {
    /// Makes every subsequent write (and readiness ping) fail, for exercising
    /// persistence errors.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}
