use chrono::NaiveDate;
use serde::Serialize;

use super::EngineError;
use crate::models::player::DailyQuests;
use crate::models::quest::Difficulty;

/// Counters as they stand on `today`: zeroed when the stored date differs.
pub fn reset_daily_quests(daily: &DailyQuests, today: NaiveDate) -> DailyQuests {
    if daily.date == Some(today) {
        daily.clone()
    } else {
        DailyQuests::zeroed(today)
    }
}

/// Fails when `difficulty` has reached its creation limit in `daily`.
pub fn check_quota(daily: &DailyQuests, difficulty: Difficulty) -> Result<(), EngineError> {
    let limit = difficulty.daily_limit();
    if daily.count(difficulty) >= limit {
        return Err(EngineError::QuotaExceeded { difficulty, limit });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    pub difficulty: Difficulty,
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
}

/// Per-difficulty usage for `today`, without touching the stored counters.
pub fn quota_status(daily: &DailyQuests, today: NaiveDate) -> Vec<QuotaStatus> {
    let current = reset_daily_quests(daily, today);
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let used = current.count(difficulty);
            let limit = difficulty.daily_limit();
            QuotaStatus {
                difficulty,
                used,
                limit,
                remaining: limit.saturating_sub(used),
            }
        })
        .collect()
}
