// Resting a turn

use crate::game::arena::GameArena;
use crate::game::hero::Hero;

use super::{entity_mut, ActionFailure, ActionResult, Actor};

/// Health regained per turn of rest
const REST_HEALING: i32 = 1;

pub(super) fn make(actor: Actor, hero: &mut Hero, arena: &mut GameArena) -> ActionResult {
    let Some(rester) = entity_mut(actor, hero, arena) else {
        return ActionResult::failure(ActionFailure::ActorMissing(actor));
    };

    let healed = rester.core_mut().increase_health(REST_HEALING);
    if healed > 0 {
        log::trace!("{} rests and recovers {}", rester, healed);
    }
    ActionResult::success()
}
