use std::{env, str::FromStr};

use anyhow::{anyhow, Context};
use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres key-value store. In-memory when unset.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    /// Allowed in addition to `frontend_url`.
    pub cors_extra_origins: Vec<String>,

    /// Minutes east of UTC that define the player's calendar day.
    pub utc_offset_minutes: i32,

    pub quests_key: String,
    pub player_key: String,

    pub notification_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("PORT", 8080)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),

            utc_offset_minutes: parse_var("UTC_OFFSET_MINUTES", 0)?,

            quests_key: env::var("QUESTS_KEY").unwrap_or_else(|_| "quest-logger-quests".into()),
            player_key: env::var("PLAYER_KEY").unwrap_or_else(|_| "quest-logger-player".into()),

            notification_capacity: parse_var("NOTIFICATION_CAPACITY", 32)?,
        };

        // validate early so a bad offset fails at startup
        config.utc_offset()?;
        Ok(config)
    }

    pub fn utc_offset(&self) -> anyhow::Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or_else(|| anyhow!("UTC_OFFSET_MINUTES out of range: {}", self.utc_offset_minutes))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Unset falls back to `default`; set but unparseable fails startup.
fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            utc_offset_minutes: 0,
            quests_key: "quest-logger-quests".into(),
            player_key: "quest-logger-player".into(),
            notification_capacity: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_offset_bounds() {
        let config = Config {
            utc_offset_minutes: 540,
            ..Config::default()
        };
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 540 * 60);

        let bad = Config {
            utc_offset_minutes: 24 * 60,
            ..Config::default()
        };
        assert!(bad.utc_offset().is_err());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("QUESTLOG_TEST_CAPACITY_BAD", "lots");
        let err = parse_var::<usize>("QUESTLOG_TEST_CAPACITY_BAD", 32).unwrap_err();
        assert!(err.to_string().contains("QUESTLOG_TEST_CAPACITY_BAD"));

        env::set_var("QUESTLOG_TEST_CAPACITY_OK", " 64 ");
        assert_eq!(parse_var::<usize>("QUESTLOG_TEST_CAPACITY_OK", 32).unwrap(), 64);
        assert_eq!(parse_var::<usize>("QUESTLOG_TEST_CAPACITY_UNSET", 32).unwrap(), 32);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("https://a.example, ,https://b.example,"),
            ["https://a.example", "https://b.example"]
        );
        assert!(split_list("").is_empty());
    }
}
