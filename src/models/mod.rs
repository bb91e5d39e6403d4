pub mod player;
pub mod quest;
pub mod title;
