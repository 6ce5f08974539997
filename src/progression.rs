//! Level and attribute-point progression.
//!
//! Every two levels grant a skill point that may go into an ability or
//! into raw attributes. Levels past 15 force points into attributes once
//! ability points are exhausted, with level 15 itself carrying exactly
//! one forced point. This model encodes those bounds without modeling
//! full ability trees.

use crate::constants::{FORCED_ATTR_LEVEL, MAX_ATTR_LEVELS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    level: u32,
    attr_levels: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            level: 1,
            attr_levels: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Skill points spent on raw attributes instead of abilities.
    pub fn attr_levels(&self) -> u32 {
        self.attr_levels
    }

    /// Sets the level and resets attr_levels to the minimum legal value
    /// for it. Callers wanting more attribute points raise them
    /// explicitly afterwards via [`set_attr_levels`](Self::set_attr_levels).
    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.attr_levels = self.min_possible();
    }

    /// Stores `attr_levels` clamped into the legal range for the current
    /// level. Out-of-range input is silently clamped, never rejected.
    pub fn set_attr_levels(&mut self, attr_levels: u32) {
        self.attr_levels = attr_levels.clamp(self.min_possible(), self.max_possible());
    }

    /// One point every two levels, at most ten in total.
    pub fn max_possible(&self) -> u32 {
        (self.level / 2).min(MAX_ATTR_LEVELS)
    }

    /// Forced attribute points: exactly one at level 15, then one per
    /// level past 15 up to the ten-point ceiling.
    pub fn min_possible(&self) -> u32 {
        if self.level == FORCED_ATTR_LEVEL {
            1
        } else {
            self.level
                .saturating_sub(FORCED_ATTR_LEVEL)
                .min(MAX_ATTR_LEVELS)
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
