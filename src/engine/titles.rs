//! Title unlock evaluation.
//!
//! Titles are scanned in catalog order and appended to the player's list in
//! that order. The displayed title is the most recently unlocked one (the
//! last id in the list), not the highest-ranked one.

use crate::models::player::PlayerState;
use crate::models::title::{self, Title, TitleKind, CATALOG};

fn meets_requirement(player: &PlayerState, title: &Title) -> bool {
    let value = match title.kind {
        TitleKind::Level => player.level,
        TitleKind::Completed => player.total_completed,
        TitleKind::Streak => player.streak,
    };
    value >= title.requirement
}

/// Titles the player qualifies for but has not unlocked yet, in catalog order.
pub fn evaluate_titles(player: &PlayerState) -> Vec<&'static Title> {
    CATALOG
        .iter()
        .filter(|t| !player.titles.contains(&t.id))
        .filter(|t| meets_requirement(player, t))
        .collect()
}

/// Appends every newly earned title to `player.titles` and returns them.
pub fn unlock_titles(player: &mut PlayerState) -> Vec<&'static Title> {
    let earned = evaluate_titles(player);
    player.titles.extend(earned.iter().map(|t| t.id));
    earned
}

pub fn current_title(player: &PlayerState) -> Option<&'static Title> {
    player.titles.last().and_then(|&id| title::find(id))
}
