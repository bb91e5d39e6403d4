//! Experience and leveling
//!
//! Each level needs `level * 100` XP. Excess XP always rolls into further
//! level-ups at the moment it is earned, so a stored `xp` is strictly below
//! the current threshold.

pub const XP_PER_LEVEL: u32 = 100;

/// XP needed to advance past `level`.
pub fn xp_required_for(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL)
}

/// Result of applying an XP gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGain {
    pub level: u32,
    pub xp: u32,
    pub levels_gained: u32,
}

impl XpGain {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Adds `amount` to `xp` and rolls thresholds over one level at a time.
pub fn apply_xp_gain(level: u32, xp: u32, amount: u32) -> XpGain {
    let start_level = level.max(1);
    let mut level = start_level;
    let mut remaining = u64::from(xp) + u64::from(amount);

    while remaining >= u64::from(xp_required_for(level)) {
        remaining -= u64::from(xp_required_for(level));
        level += 1;
    }

    XpGain {
        level,
        // below xp_required_for(level), which fits in u32
        xp: remaining as u32,
        levels_gained: level - start_level,
    }
}

/// Whole percent of the way through the current level.
pub fn progress_percent(level: u32, xp: u32) -> u32 {
    let required = xp_required_for(level.max(1));
    ((u64::from(xp) * 100) / u64::from(required)) as u32
}
