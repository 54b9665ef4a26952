// Strength and how it scales weapon damage

use crate::core::math::{clamp, lerp};

/// Strength surplus at which damage is doubled
const MAX_BONUS_SURPLUS: i32 = 20;

/// Strength deficit at which damage bottoms out
const MAX_PENALTY_DEFICIT: i32 = 10;

/// Smallest damage scale a too heavy weapon can fall to
const MIN_DAMAGE_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub value: i32,
}

impl Strength {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Damage multiplier for wielding something of the given heft.
    ///
    /// Exactly strong enough gives 1.0. Each point of surplus adds a share of
    /// a doubling, each point of deficit removes a share down to the minimum.
    pub fn damage_scale(&self, heft: i32) -> f32 {
        let surplus = self.value - heft;
        if surplus >= 0 {
            let t = clamp(surplus, 0, MAX_BONUS_SURPLUS) as f32 / MAX_BONUS_SURPLUS as f32;
            lerp(1.0, 2.0, t)
        } else {
            let t = clamp(-surplus, 0, MAX_PENALTY_DEFICIT) as f32 / MAX_PENALTY_DEFICIT as f32;
            lerp(1.0, MIN_DAMAGE_SCALE, t)
        }
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::new(10)
    }
}
