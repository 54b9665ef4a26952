// Walking one tile

use crate::core::Direction;
use crate::game::arena::GameArena;
use crate::game::entity::Entity;
use crate::game::hero::Hero;

use super::{entity, entity_mut, Action, ActionFailure, ActionResult, Actor};

pub(super) fn make(
    actor: Actor,
    direction: Direction,
    hero: &mut Hero,
    arena: &mut GameArena,
) -> ActionResult {
    if direction.is_none() {
        return ActionResult::fallback_to(Action::rest(actor));
    }

    let Some(walker) = entity(actor, hero, arena) else {
        return ActionResult::failure(ActionFailure::ActorMissing(actor));
    };
    let destination = walker.position() + direction.offset();
    let motilities = walker.motilities();

    if !arena.in_bounds(destination) {
        return ActionResult::failure(ActionFailure::OutOfBounds(destination));
    }

    let occupant = if hero.is_alive() && hero.position() == destination {
        Some(Actor::Hero)
    } else {
        arena.monster_at(destination).map(Actor::Monster)
    };
    if let Some(occupant) = occupant {
        if actor.is_opponent_of(occupant) {
            return ActionResult::fallback_to(Action::attack(actor, occupant));
        }
        return ActionResult::failure(ActionFailure::Blocked(destination));
    }

    if !arena.can_enter(destination, motilities) {
        log::debug!("{:?} cannot enter {}", actor, destination);
        return ActionResult::failure(ActionFailure::Blocked(destination));
    }

    match entity_mut(actor, hero, arena) {
        Some(walker) => {
            walker.move_to(destination);
            ActionResult::success()
        }
        None => ActionResult::failure(ActionFailure::ActorMissing(actor)),
    }
}
