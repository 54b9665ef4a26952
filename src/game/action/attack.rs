// Melee attacks between the hero and monsters

use crate::game::arena::GameArena;
use crate::game::entity::Entity;
use crate::game::hero::Hero;

use super::{Action, ActionFailure, ActionResult, Actor};

pub(super) fn make(
    action: &Action,
    target: Actor,
    hero: &mut Hero,
    arena: &mut GameArena,
) -> ActionResult {
    match (action.actor(), target) {
        (Actor::Hero, Actor::Monster(id)) => match arena.monster_mut(id) {
            Some(monster) => resolve(action, target, hero, monster),
            None => ActionResult::failure(ActionFailure::InvalidTarget(target)),
        },
        (Actor::Monster(id), Actor::Hero) => match arena.monster_mut(id) {
            Some(monster) => resolve(action, target, monster, hero),
            None => ActionResult::failure(ActionFailure::ActorMissing(action.actor())),
        },
        _ => ActionResult::failure(ActionFailure::InvalidTarget(target)),
    }
}

/// Land every melee hit the attacker generates, running both sides' hooks
fn resolve(
    action: &Action,
    target: Actor,
    attacker: &mut dyn Entity,
    defender: &mut dyn Entity,
) -> ActionResult {
    if !defender.is_alive() {
        return ActionResult::failure(ActionFailure::ActorDead(target));
    }

    let hits = attacker.generate_melee_hits(&*defender);
    for hit in hits {
        let damage = defender.core_mut().decrease_health(hit.damage());
        log::debug!(
            "{} hits {} with {} for {}",
            attacker,
            defender,
            hit.attack().name(),
            damage
        );

        attacker.on_give_damage(action, damage, Some(&*defender));
        defender.on_receive_damage(action, damage, Some(&*attacker));

        if !defender.is_alive() {
            defender.on_killed(Some(&*attacker));
            break;
        }
    }

    ActionResult::success()
}
