// Actions: what an entity does with its turn
//
// An action is made against the hero and the arena. Making it either
// finishes (successfully or not) or hands back a fallback action to make
// instead, e.g. walking into a monster falls back to attacking it.

mod attack;
mod rest;
mod walk;

use glam::IVec2;

use crate::core::Direction;

use super::arena::GameArena;
use super::entity::{Entity, EntityId};
use super::hero::Hero;

/// Who is acting (or being acted upon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Hero,
    Monster(EntityId),
}

impl Actor {
    /// Hero and monsters fight each other; monsters do not fight monsters
    pub fn is_opponent_of(self, other: Actor) -> bool {
        matches!(
            (self, other),
            (Actor::Hero, Actor::Monster(_)) | (Actor::Monster(_), Actor::Hero)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Walk(Direction),
    Attack(Actor),
    Rest,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ActionFailure {
    #[error("{0} is outside the arena")]
    OutOfBounds(IVec2),

    #[error("{0} cannot be entered")]
    Blocked(IVec2),

    #[error("{0:?} is not in the arena")]
    ActorMissing(Actor),

    #[error("{0:?} cannot be attacked")]
    InvalidTarget(Actor),

    #[error("{0:?} is dead")]
    ActorDead(Actor),
}

/// Result of making an action once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub outcome: Result<(), ActionFailure>,
    /// Action to make instead, if this one turned into something else
    pub fallback: Option<Action>,
}

impl ActionResult {
    pub fn success() -> Self {
        Self {
            outcome: Ok(()),
            fallback: None,
        }
    }

    pub fn failure(failure: ActionFailure) -> Self {
        Self {
            outcome: Err(failure),
            fallback: None,
        }
    }

    pub fn fallback_to(action: Action) -> Self {
        Self {
            outcome: Ok(()),
            fallback: Some(action),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    actor: Actor,
    kind: ActionKind,
}

impl Action {
    pub fn new(actor: Actor, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    pub fn walk(actor: Actor, direction: Direction) -> Self {
        Self::new(actor, ActionKind::Walk(direction))
    }

    pub fn attack(actor: Actor, target: Actor) -> Self {
        Self::new(actor, ActionKind::Attack(target))
    }

    pub fn rest(actor: Actor) -> Self {
        Self::new(actor, ActionKind::Rest)
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Make this action once, without following its fallback
    pub fn make(&self, hero: &mut Hero, arena: &mut GameArena) -> ActionResult {
        match entity(self.actor, hero, arena) {
            None => return ActionResult::failure(ActionFailure::ActorMissing(self.actor)),
            Some(actor) if !actor.is_alive() => {
                return ActionResult::failure(ActionFailure::ActorDead(self.actor))
            }
            Some(_) => {}
        }

        match self.kind {
            ActionKind::Walk(direction) => walk::make(self.actor, direction, hero, arena),
            ActionKind::Attack(target) => attack::make(self, target, hero, arena),
            ActionKind::Rest => rest::make(self.actor, hero, arena),
        }
    }

    /// Make this action, then each fallback in turn until one finishes
    pub fn perform(self, hero: &mut Hero, arena: &mut GameArena) -> Result<(), ActionFailure> {
        let mut action = self;
        loop {
            let result = action.make(hero, arena);
            match result.fallback {
                Some(fallback) => {
                    log::trace!("{:?} falls back to {:?}", action.kind, fallback.kind);
                    action = fallback;
                }
                None => return result.outcome,
            }
        }
    }
}

pub(super) fn entity<'a>(
    actor: Actor,
    hero: &'a Hero,
    arena: &'a GameArena,
) -> Option<&'a dyn Entity> {
    match actor {
        Actor::Hero => Some(hero as &dyn Entity),
        Actor::Monster(id) => arena.monster(id).map(|m| m as &dyn Entity),
    }
}

pub(super) fn entity_mut<'a>(
    actor: Actor,
    hero: &'a mut Hero,
    arena: &'a mut GameArena,
) -> Option<&'a mut dyn Entity> {
    match actor {
        Actor::Hero => Some(hero as &mut dyn Entity),
        Actor::Monster(id) => arena.monster_mut(id).map(|m| m as &mut dyn Entity),
    }
}
