// Hero behaviours: what the hero does on its own between player inputs

use std::fmt;

use crate::game::action::ActionKind;
use crate::game::entity::Entity;

use super::Hero;

/// Strategy choosing the hero's actions while it is not awaiting input
pub trait HeroBehavior: fmt::Debug {
    /// Whether the behaviour can still go on
    fn is_possible(&self, hero: &Hero) -> bool;

    /// Action for this turn, if any
    fn next_action(&mut self, hero: &Hero) -> Option<ActionKind>;

    fn clone_behavior(&self) -> Box<dyn HeroBehavior>;
}

impl Clone for Box<dyn HeroBehavior> {
    fn clone(&self) -> Self {
        self.clone_behavior()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestLimit {
    Turns(u32),
    UntilHealed,
}

/// Rest in place for a number of turns or until fully healed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestBehavior {
    limit: RestLimit,
}

impl RestBehavior {
    pub fn turns(turns: u32) -> Self {
        Self {
            limit: RestLimit::Turns(turns),
        }
    }

    pub fn until_healed() -> Self {
        Self {
            limit: RestLimit::UntilHealed,
        }
    }

    /// A rest with nothing left to do. Holds the hero for the rest of a turn
    /// it already acted in; dropped at the next input poll.
    pub fn spent() -> Self {
        Self::turns(0)
    }
}

impl Default for RestBehavior {
    fn default() -> Self {
        Self::turns(1)
    }
}

impl HeroBehavior for RestBehavior {
    fn is_possible(&self, hero: &Hero) -> bool {
        if !hero.is_alive() {
            return false;
        }
        match self.limit {
            RestLimit::Turns(turns) => turns > 0,
            RestLimit::UntilHealed => hero.health() < hero.max_health(),
        }
    }

    fn next_action(&mut self, hero: &Hero) -> Option<ActionKind> {
        if !self.is_possible(hero) {
            return None;
        }
        if let RestLimit::Turns(turns) = &mut self.limit {
            *turns -= 1;
        }
        Some(ActionKind::Rest)
    }

    fn clone_behavior(&self) -> Box<dyn HeroBehavior> {
        Box::new(*self)
    }
}
