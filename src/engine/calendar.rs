use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::models::quest::{Quest, QuestStore};

/// Quests whose completion falls on `date` in the player's offset, store order.
pub fn quests_completed_on<'a>(
    quests: &'a QuestStore,
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<&'a Quest> {
    quests
        .iter()
        .filter(|q| q.completed_on(offset) == Some(date))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub completed_count: u32,
    pub has_completions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st, 0 = Sunday.
    pub starting_weekday: u32,
    pub days: Vec<CalendarDay>,
}

/// Completion presence for every day of a month. `None` for an invalid month.
pub fn month_activity(
    quests: &QuestStore,
    year: i32,
    month: u32,
    offset: FixedOffset,
) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days_in_month = (next_first - first).num_days() as u32;

    let mut counts = vec![0u32; days_in_month as usize];
    for date in quests.iter().filter_map(|q| q.completed_on(offset)) {
        if date.year() == year && date.month() == month {
            counts[date.day0() as usize] += 1;
        }
    }

    let days = first
        .iter_days()
        .zip(counts)
        .map(|(date, completed_count)| CalendarDay {
            date,
            completed_count,
            has_completions: completed_count > 0,
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        days_in_month,
        starting_weekday: first.weekday().num_days_from_sunday(),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quest::Difficulty;
    use chrono::{TimeZone, Utc};

    fn completed_at(y: i32, m: u32, d: u32, h: u32) -> Quest {
        let at = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        let mut quest = Quest::new("done".into(), Difficulty::Easy, at);
        quest.completed = true;
        quest.completed_at = Some(at);
        quest
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_quests_completed_on_date() {
        let open = Quest::new("open".into(), Difficulty::Hard, Utc::now());
        let store = QuestStore::new(vec![
            completed_at(2026, 2, 10, 8),
            open,
            completed_at(2026, 2, 11, 8),
            completed_at(2026, 2, 10, 23),
        ]);
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(quests_completed_on(&store, date, utc()).len(), 2);

        // 23:00 UTC is already the 11th at +02:00
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(quests_completed_on(&store, date, plus_two).len(), 1);
    }

    #[test]
    fn test_month_grid_february() {
        let store = QuestStore::new(vec![
            completed_at(2026, 2, 1, 9),
            completed_at(2026, 2, 1, 10),
            completed_at(2026, 2, 28, 9),
            completed_at(2026, 3, 1, 9),
        ]);
        let month = month_activity(&store, 2026, 2, utc()).unwrap();

        assert_eq!(month.days_in_month, 28);
        // 2026-02-01 is a Sunday
        assert_eq!(month.starting_weekday, 0);
        assert_eq!(month.days.len(), 28);
        assert_eq!(month.days[0].completed_count, 2);
        assert!(month.days[27].has_completions);
        assert_eq!(month.days.iter().filter(|d| d.has_completions).count(), 2);
    }

    #[test]
    fn test_december_and_leap_year() {
        let empty = QuestStore::default();
        assert_eq!(month_activity(&empty, 2026, 12, utc()).unwrap().days_in_month, 31);
        assert_eq!(month_activity(&empty, 2028, 2, utc()).unwrap().days_in_month, 29);
    }

    #[test]
    fn test_invalid_month() {
        assert!(month_activity(&QuestStore::default(), 2026, 13, utc()).is_none());
        assert!(month_activity(&QuestStore::default(), 2026, 0, utc()).is_none());
    }
}
