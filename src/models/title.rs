use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Level,
    Completed,
    Streak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub id: u32,
    pub name: &'static str,
    pub requirement: u32,
    #[serde(rename = "type")]
    pub kind: TitleKind,
    pub description: &'static str,
}

/// Display name used while no title has been unlocked.
pub const DEFAULT_TITLE_NAME: &str = "Adventurer";

const fn title(
    id: u32,
    name: &'static str,
    requirement: u32,
    kind: TitleKind,
    description: &'static str,
) -> Title {
    Title {
        id,
        name,
        requirement,
        kind,
        description,
    }
}

/// Static catalog. Evaluation walks it in this order.
pub static CATALOG: [Title; 15] = [
    title(1, "Apprentice Adventurer", 1, TitleKind::Level, "Reach level 1"),
    title(2, "Fledgling Hero", 5, TitleKind::Level, "Reach level 5"),
    title(3, "Quest Hunter", 10, TitleKind::Completed, "Complete 10 quests"),
    title(4, "Legendary Hero", 10, TitleKind::Level, "Reach level 10"),
    title(5, "Indomitable Warrior", 7, TitleKind::Streak, "7-day streak"),
    title(6, "Task Master", 50, TitleKind::Completed, "Complete 50 quests"),
    title(7, "Asura", 100, TitleKind::Completed, "Complete 100 quests"),
    title(8, "Mythic Being", 20, TitleKind::Level, "Reach level 20"),
    title(9, "Demon of Persistence", 14, TitleKind::Streak, "14-day streak"),
    title(10, "True Master", 30, TitleKind::Level, "Reach level 30"),
    title(11, "Quest Maniac", 200, TitleKind::Completed, "Complete 200 quests"),
    title(12, "Ruler of the Moon", 30, TitleKind::Streak, "30-day streak"),
    title(13, "Transcendent", 50, TitleKind::Level, "Reach level 50"),
    title(14, "Legendary Devotee", 100, TitleKind::Streak, "100-day streak"),
    title(15, "Ultimate Adventurer", 500, TitleKind::Completed, "Complete 500 quests"),
];

pub fn find(id: u32) -> Option<&'static Title> {
    CATALOG.iter().find(|t| t.id == id)
}
