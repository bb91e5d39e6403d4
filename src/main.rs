use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Mutex;

mod clock;
mod config;
mod db;
mod dto;
mod engine;
mod error;
mod extract;
mod handlers;
mod models;
mod notifications;
mod routes;

use clock::{Clock, SystemClock};
use config::Config;
use db::game_repo::GameRepo;
use db::kv::KvStore;
use models::player::GameState;
use notifications::NotificationQueue;

#[derive(Clone)]
pub struct AppState {
    pub repo: GameRepo,
    /// Live quests + player. Held for the whole read-modify-persist of a mutation.
    pub game: Arc<Mutex<GameState>>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
    pub notifications: NotificationQueue,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    // Store
    let store = match &config.database_url {
        Some(url) => {
            let db = db::pool::create_pool(url)
                .await
                .context("Failed to create database pool")?;
            sqlx::migrate!("./migrations")
                .run(&db)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
            KvStore::Postgres(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, progress is kept in memory only");
            KvStore::memory()
        }
    };

    let repo = GameRepo::new(store, config.quests_key.clone(), config.player_key.clone());
    let game = repo.load().await.context("Failed to load saved game")?;
    tracing::info!(
        quests = game.quests.len(),
        level = game.player.level,
        streak = game.player.streak,
        "Game state loaded"
    );

    let state = AppState {
        repo,
        game: Arc::new(Mutex::new(game)),
        clock: Arc::new(SystemClock::new(config.utc_offset()?)),
        config: config.clone(),
        notifications: NotificationQueue::new(config.notification_capacity),
    };

    let app = routes::router(state)?;

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
