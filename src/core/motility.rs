// Ways an entity can cross terrain

use std::fmt;

/// A single way of moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motility {
    Walk,
    Swim,
    Fly,
}

impl Motility {
    fn bit(self) -> u8 {
        match self {
            Motility::Walk => 1 << 0,
            Motility::Swim => 1 << 1,
            Motility::Fly => 1 << 2,
        }
    }
}

/// Set of motilities an entity currently has
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotilitySet(u8);

impl MotilitySet {
    pub const EMPTY: MotilitySet = MotilitySet(0);

    /// A set holding only walking
    pub fn walking() -> Self {
        Self::EMPTY.with(Motility::Walk)
    }

    /// Builder-style insert
    pub fn with(mut self, motility: Motility) -> Self {
        self.insert(motility);
        self
    }

    pub fn contains(&self, motility: Motility) -> bool {
        self.0 & motility.bit() != 0
    }

    /// True if any motility of `other` is also in this set
    pub fn intersects(&self, other: MotilitySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, motility: Motility) {
        self.0 |= motility.bit();
    }

    pub fn remove(&mut self, motility: Motility) {
        self.0 &= !motility.bit();
    }

    /// Flip a motility, returning whether it is now present
    pub fn toggle(&mut self, motility: Motility) -> bool {
        self.0 ^= motility.bit();
        self.contains(motility)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for MotilitySet {
    fn default() -> Self {
        Self::walking()
    }
}

impl fmt::Debug for MotilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<Motility> = [Motility::Walk, Motility::Swim, Motility::Fly]
            .into_iter()
            .filter(|m| self.contains(*m))
            .collect();
        f.debug_set().entries(members).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_walking_only() {
        let set = MotilitySet::default();
        assert!(set.contains(Motility::Walk));
        assert!(!set.contains(Motility::Swim));
        assert!(!set.contains(Motility::Fly));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut set = MotilitySet::walking();
        assert!(set.toggle(Motility::Fly));
        assert!(set.contains(Motility::Fly));
        assert!(!set.toggle(Motility::Fly));
        assert!(!set.contains(Motility::Fly));
        assert!(set.contains(Motility::Walk));
    }

    #[test]
    fn test_remove_and_empty() {
        let mut set = MotilitySet::walking();
        set.remove(Motility::Walk);
        assert!(set.is_empty());
    }

    #[test]
    fn test_intersects() {
        let swimmer = MotilitySet::EMPTY.with(Motility::Swim);
        let water = MotilitySet::EMPTY.with(Motility::Swim).with(Motility::Fly);
        assert!(swimmer.intersects(water));
        assert!(!MotilitySet::walking().intersects(water));
    }
}
