use chrono::NaiveDate;

/// Streak after a completion on `today`.
///
/// Same day keeps the streak, the next day extends it, and any larger gap
/// (or a `today` earlier than the last completion) starts over at 1.
pub fn compute_streak(last_completed: Option<NaiveDate>, current: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_completed else {
        return 1;
    };

    match (today - last).num_days() {
        0 => current,
        1 => current.saturating_add(1),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_first_completion_starts_at_one() {
        assert_eq!(compute_streak(None, 0, day(5)), 1);
        assert_eq!(compute_streak(None, 9, day(5)), 1);
    }

    #[test]
    fn test_same_day_keeps_streak() {
        assert_eq!(compute_streak(Some(day(5)), 4, day(5)), 4);
    }

    #[test]
    fn test_consecutive_days_accumulate() {
        let mut streak = 0;
        let mut last = None;
        let start = day(1);
        for n in 0..10 {
            let today = start + Duration::days(n);
            streak = compute_streak(last, streak, today);
            last = Some(today);
        }
        assert_eq!(streak, 10);
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(compute_streak(Some(day(5)), 6, day(7)), 1);
        assert_eq!(compute_streak(Some(day(1)), 6, day(30)), 1);
    }

    #[test]
    fn test_backdated_clock_counts_as_gap() {
        assert_eq!(compute_streak(Some(day(10)), 6, day(9)), 1);
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let jan31 = day(31);
        let feb1 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(compute_streak(Some(jan31), 2, feb1), 3);
    }
}
