use chrono::NaiveDate;

use super::leveling::{apply_xp_gain, XpGain};
use super::quota::reset_daily_quests;
use super::EngineError;
use crate::models::player::PlayerState;

const BASE_BONUS_XP: u32 = 20;
const STREAK_BONUS_XP: u32 = 5;

pub fn bonus_amount(streak: u32) -> u32 {
    BASE_BONUS_XP.saturating_add(streak.saturating_mul(STREAK_BONUS_XP))
}

/// XP of the pending bonus for `today`, if one is due.
///
/// A player with no completions and no prior bonus has no activity yet and
/// gets nothing.
pub fn check_login_bonus(player: &PlayerState, today: NaiveDate) -> Option<u32> {
    match player.last_login_date {
        None if player.total_completed == 0 => None,
        Some(last) if last == today => None,
        _ => Some(bonus_amount(player.streak)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginBonusGrant {
    pub player: PlayerState,
    pub amount: u32,
    pub gain: XpGain,
}

/// Commits the pending bonus. Streak is left alone.
///
/// `expected` is the amount the player was shown. When it no longer matches
/// the due amount nothing is granted, so the player never receives a bonus
/// other than the one they acknowledged.
pub fn grant_login_bonus(
    player: &PlayerState,
    today: NaiveDate,
    expected: Option<u32>,
) -> Result<LoginBonusGrant, EngineError> {
    let amount = check_login_bonus(player, today).ok_or(EngineError::LoginBonusNotDue)?;
    if let Some(expected) = expected.filter(|&xp| xp != amount) {
        return Err(EngineError::LoginBonusChanged {
            expected,
            due: amount,
        });
    }
    let gain = apply_xp_gain(player.level, player.xp, amount);

    let next = PlayerState {
        level: gain.level,
        xp: gain.xp,
        last_login_date: Some(today),
        daily_quests: reset_daily_quests(&player.daily_quests, today),
        ..player.clone()
    };

    Ok(LoginBonusGrant {
        player: next,
        amount,
        gain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
    }

    #[test]
    fn test_bonus_amount() {
        assert_eq!(bonus_amount(0), 20);
        assert_eq!(bonus_amount(3), 35);
        assert_eq!(bonus_amount(10), 70);
    }

    #[test]
    fn test_no_bonus_without_activity() {
        assert_eq!(check_login_bonus(&PlayerState::default(), day(1)), None);
    }

    #[test]
    fn test_first_bonus_after_first_completion() {
        let player = PlayerState {
            total_completed: 1,
            streak: 1,
            ..PlayerState::default()
        };
        assert_eq!(check_login_bonus(&player, day(1)), Some(25));
    }

    #[test]
    fn test_once_per_day() {
        let player = PlayerState {
            total_completed: 4,
            last_login_date: Some(day(2)),
            ..PlayerState::default()
        };
        assert_eq!(check_login_bonus(&player, day(2)), None);
        assert_eq!(check_login_bonus(&player, day(3)), Some(20));
    }

    #[test]
    fn test_grant_levels_up_and_keeps_streak() {
        let player = PlayerState {
            level: 1,
            xp: 90,
            total_completed: 6,
            streak: 3,
            last_login_date: Some(day(1)),
            ..PlayerState::default()
        };
        let grant = grant_login_bonus(&player, day(2), Some(35)).unwrap();

        assert_eq!(grant.amount, 35);
        assert!(grant.gain.leveled_up());
        assert_eq!((grant.player.level, grant.player.xp), (2, 25));
        assert_eq!(grant.player.streak, 3);
        assert_eq!(grant.player.last_login_date, Some(day(2)));
        assert_eq!(grant.player.daily_quests.date, Some(day(2)));
    }

    #[test]
    fn test_grant_twice_same_day_fails() {
        let player = PlayerState {
            total_completed: 1,
            ..PlayerState::default()
        };
        let grant = grant_login_bonus(&player, day(5), None).unwrap();
        assert_eq!(
            grant_login_bonus(&grant.player, day(5), None),
            Err(EngineError::LoginBonusNotDue)
        );
    }

    #[test]
    fn test_grant_rejects_stale_amount() {
        let player = PlayerState {
            total_completed: 3,
            streak: 2,
            last_login_date: Some(day(1)),
            ..PlayerState::default()
        };
        assert_eq!(
            grant_login_bonus(&player, day(2), Some(25)),
            Err(EngineError::LoginBonusChanged {
                expected: 25,
                due: 30
            })
        );
        assert_eq!(grant_login_bonus(&player, day(2), Some(30)).unwrap().amount, 30);
    }
}
