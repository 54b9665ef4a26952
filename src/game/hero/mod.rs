// The hero
//
// - `behavior`: strategies that act for the hero between inputs
// - `info`: hero data and starting values

pub mod behavior;
pub mod info;

pub use info::HeroInfo;

use std::fmt;

use glam::IVec2;

use crate::core::{Direction, Motility, MotilitySet};
use crate::engine::input::{Command, KeyboardPoll};
use crate::engine::renderer::{RenderTarget, Sprite};
use crate::game::action::{Action, Actor};
use crate::game::arena::GameArena;
use crate::game::combat::{AttackInfo, AttackKind, Hit};
use crate::game::entity::{Entity, EntityCore, HERO_ID};

use behavior::{HeroBehavior, RestBehavior};

/// Damage of the bare-handed attack used when no melee weapon is wielded
pub const PUNCH_POWER: i32 = 2;

/// Directional commands in the order they are checked; the first held wins
const DIRECTION_COMMANDS: [(Command, Direction); 4] = [
    (Command::MoveWest, Direction::W),
    (Command::MoveEast, Direction::E),
    (Command::MoveNorth, Direction::N),
    (Command::MoveSouth, Direction::S),
];

/// Width of the event column in damage log lines
const EVENT_COLUMN: usize = 18;

/// Damage events the hero reports in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeroEvent {
    GiveDamage,
    ReceiveDamage,
    Killed,
}

impl HeroEvent {
    fn name(self) -> &'static str {
        match self {
            Self::GiveDamage => "on_give_damage",
            Self::ReceiveDamage => "on_receive_damage",
            Self::Killed => "on_killed",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::GiveDamage => "damaged",
            Self::ReceiveDamage => "was hit by",
            Self::Killed => "was killed by",
        }
    }
}

/// The player-controlled entity.
///
/// With no active behaviour the hero waits for the player. Behaviours such
/// as resting act on the hero's behalf until they stop being possible.
#[derive(Debug, Clone)]
pub struct Hero {
    core: EntityCore,
    data: HeroInfo,
    behavior: Option<Box<dyn HeroBehavior>>,
}

impl Hero {
    /// Create a hero at full health, resting for its first turn.
    ///
    /// # Panics
    ///
    /// In debug builds, if `data.max_health` is not positive.
    pub fn new(initial_pos: IVec2, data: HeroInfo) -> Self {
        let mut hero = Self {
            core: EntityCore::new(HERO_ID, &data.name, initial_pos, data.max_health),
            data,
            behavior: Some(Box::new(RestBehavior::default())),
        };

        let initial_health = hero.max_health();
        debug_assert!(initial_health > 0, "Hero max health cannot be lower than 1");
        hero.core.increase_health(initial_health);

        // Force graphic update
        hero.on_move(initial_pos, initial_pos);

        hero
    }

    pub fn info(&self) -> &HeroInfo {
        &self.data
    }

    pub fn sprite(&self) -> &Sprite {
        &self.data.graphics.sprite
    }

    pub fn active_behavior(&self) -> Option<&dyn HeroBehavior> {
        self.behavior.as_deref()
    }

    /// Drop the active behaviour so the next poll waits for the player
    pub fn mark_as_waiting_for_inputs(&mut self) {
        self.behavior = None;
    }

    /// Flip a motility, returning whether the hero now has it
    pub fn toggle_motility(&mut self, motility: Motility) -> bool {
        let enabled = self.data.motilities.toggle(motility);
        log::info!(
            "{} {} {:?}",
            self,
            if enabled { "gains" } else { "loses" },
            motility
        );
        enabled
    }

    /// Poll the keyboard and act on it.
    ///
    /// Motility toggles apply immediately. A directional command makes a
    /// walk (and whatever it falls back to, such as an attack) and uses up
    /// the hero's turn. Returns true while the hero has no behaviour, i.e.
    /// the player still has to act this turn.
    pub fn is_waiting_for_inputs(
        &mut self,
        keyboard: &mut dyn KeyboardPoll,
        arena: &mut GameArena,
    ) -> bool {
        // If current behavior is not possible reset it
        if self
            .behavior
            .as_ref()
            .is_some_and(|behavior| !behavior.is_possible(self))
        {
            self.mark_as_waiting_for_inputs();
        }

        if keyboard.take_press(Command::ToggleSwim) {
            self.toggle_motility(Motility::Swim);
        }
        if keyboard.take_press(Command::ToggleFly) {
            self.toggle_motility(Motility::Fly);
        }

        let direction = DIRECTION_COMMANDS
            .iter()
            .find(|(command, _)| keyboard.take_press(*command) || keyboard.is_pressed(*command))
            .map_or(Direction::None, |(_, direction)| *direction);

        if !direction.is_none() {
            // One step per turn: the other directions' taps are dropped too
            for (command, _) in DIRECTION_COMMANDS {
                keyboard.take_press(command);
            }
            if let Err(failure) = Action::walk(Actor::Hero, direction).perform(self, arena) {
                log::debug!("{} cannot walk {:?}: {}", self, direction, failure);
            }
            self.behavior = Some(Box::new(RestBehavior::spent()));
        } else if keyboard.take_press(Command::RestUntilHealed) {
            let rest = RestBehavior::until_healed();
            if rest.is_possible(self) {
                self.behavior = Some(Box::new(rest));
            } else {
                log::info!("{} is already fully rested", self);
            }
        }

        // If currently no behavior then user should do something
        self.behavior.is_none()
    }

    /// Action the active behaviour takes this turn
    pub fn next_behavior_action(&mut self) -> Option<Action> {
        let mut behavior = self.behavior.take()?;
        let kind = behavior.next_action(self);
        self.behavior = Some(behavior);
        kind.map(|kind| Action::new(Actor::Hero, kind))
    }

    fn event_line(&self, event: HeroEvent, other: &dyn Entity) -> String {
        format!(
            "{:<width$} :: {} {} {}",
            event.name(),
            self,
            event.verb(),
            other,
            width = EVENT_COLUMN
        )
    }

    fn log_event(&self, event: HeroEvent, other: &dyn Entity) {
        log::info!("{}", self.event_line(event, other));
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core)
    }
}

impl Entity for Hero {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn motilities(&self) -> MotilitySet {
        self.data.motilities
    }

    fn on_move(&mut self, _old_position: IVec2, new_position: IVec2) {
        // Update graphics
        self.data.graphics.set_grid_position(new_position);
    }

    fn generate_melee_hits(&self, _opponent: &dyn Entity) -> Vec<Hit> {
        // Generate a hit for each weapon
        let mut hits: Vec<Hit> = self
            .data
            .equipment
            .weapons()
            .filter(|weapon| weapon.attack_info().kind() == AttackKind::Melee)
            .map(|weapon| {
                let mut hit = Hit::new(weapon.attack_info().clone());
                // Scale up/down based on weapon required heft
                hit *= self.data.strength.damage_scale(weapon.heft());
                hit
            })
            .collect();

        if hits.is_empty() {
            // At least try!
            hits.push(Hit::new(AttackInfo::new("Punch", PUNCH_POWER)));
        }

        hits
    }

    fn on_give_damage(&mut self, _action: &Action, _damage: i32, defender: Option<&dyn Entity>) {
        if let Some(defender) = defender {
            self.log_event(HeroEvent::GiveDamage, defender);
        }
    }

    fn on_receive_damage(&mut self, _action: &Action, _damage: i32, opponent: Option<&dyn Entity>) {
        if let Some(opponent) = opponent {
            self.log_event(HeroEvent::ReceiveDamage, opponent);
        }
        // Being hit interrupts whatever the hero was doing on its own
        self.mark_as_waiting_for_inputs();
    }

    fn on_killed(&mut self, opponent: Option<&dyn Entity>) {
        if let Some(opponent) = opponent {
            self.log_event(HeroEvent::Killed, opponent);
        }
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw(&self.data.graphics.sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::player::KeyboardState;
    use crate::engine::renderer::FrameQueue;
    use crate::game::arena::Tile;
    use crate::game::combat::{Strength, Weapon};
    use crate::game::entity::GraphicsData;
    use crate::game::monster::MonsterKind;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn open_arena() -> GameArena {
        GameArena::new(6, 6, Tile::Floor)
    }

    /// A hero whose opening rest is already over
    fn ready_hero(position: IVec2) -> Hero {
        let mut hero = Hero::new(position, HeroInfo::default());
        hero.mark_as_waiting_for_inputs();
        hero
    }

    #[test]
    fn test_new_hero_at_full_health() {
        let info = HeroInfo {
            max_health: 7,
            ..HeroInfo::default()
        };
        let hero = Hero::new(IVec2::new(1, 1), info);
        assert_eq!(hero.health(), 7);
        assert_eq!(hero.max_health(), 7);
        assert_eq!(hero.id(), HERO_ID);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "max health cannot be lower than 1")]
    fn test_non_positive_max_health_fails_debug_assertion() {
        let info = HeroInfo {
            max_health: 0,
            ..HeroInfo::default()
        };
        Hero::new(IVec2::ZERO, info);
    }

    #[test]
    fn test_new_hero_sprite_matches_position() {
        let hero = Hero::new(IVec2::new(3, 2), HeroInfo::default());
        assert_eq!(hero.sprite().position, Vec2::new(48.0, 32.0));
    }

    #[test]
    fn test_new_hero_rests_first() {
        let mut hero = Hero::new(IVec2::ZERO, HeroInfo::default());
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        assert!(hero.active_behavior().is_some());
        assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(
            hero.next_behavior_action(),
            Some(Action::rest(Actor::Hero))
        );

        // The opening rest is used up, so now the player is asked
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert!(hero.active_behavior().is_none());
    }

    #[test]
    fn test_waiting_without_input() {
        let mut hero = ready_hero(IVec2::new(2, 2));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(hero.position(), IVec2::new(2, 2));
    }

    #[test]
    fn test_direction_key_walks_and_ends_turn() {
        let mut hero = ready_hero(IVec2::new(2, 2));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::MoveNorth);
        assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(hero.position(), IVec2::new(2, 1));
        assert_eq!(hero.sprite().position, Vec2::new(32.0, 16.0));

        // The spent rest yields no extra action and is dropped next poll
        assert_eq!(hero.next_behavior_action(), None);
        keyboard.release_command(Command::MoveNorth);
        keyboard.update();
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
    }

    #[test]
    fn test_held_key_keeps_walking() {
        let mut hero = ready_hero(IVec2::new(0, 0));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::MoveEast);
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);
        keyboard.update();
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);

        assert_eq!(hero.position(), IVec2::new(2, 0));
    }

    #[test]
    fn test_direction_priority() {
        let mut hero = ready_hero(IVec2::new(2, 2));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::MoveSouth);
        keyboard.press_command(Command::MoveWest);
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);

        assert_eq!(hero.position(), IVec2::new(1, 2));
    }

    #[test]
    fn test_simultaneous_taps_make_one_step() {
        let mut hero = ready_hero(IVec2::new(2, 2));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::MoveWest);
        keyboard.press_command(Command::MoveSouth);
        assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(hero.position(), IVec2::new(1, 2));

        // Nothing held any more: the losing tap must not fire later
        keyboard.release_command(Command::MoveWest);
        keyboard.release_command(Command::MoveSouth);
        keyboard.update();
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(hero.position(), IVec2::new(1, 2));
    }

    #[test]
    fn test_blocked_walk_still_ends_turn() {
        let mut hero = ready_hero(IVec2::new(0, 0));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::MoveWest);
        assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert_eq!(hero.position(), IVec2::ZERO);
    }

    #[test]
    fn test_walking_into_monster_attacks_it() {
        let mut hero = ready_hero(IVec2::new(2, 2));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();
        let goblin = arena
            .spawn_monster(MonsterKind::Goblin, IVec2::new(3, 2), GraphicsData::default())
            .unwrap();

        keyboard.press_command(Command::MoveEast);
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);

        assert_eq!(hero.position(), IVec2::new(2, 2));
        assert_eq!(
            arena.monster(goblin).unwrap().health(),
            MonsterKind::Goblin.max_health() - PUNCH_POWER
        );
    }

    #[test]
    fn test_page_keys_toggle_once_per_press() {
        let mut hero = ready_hero(IVec2::ZERO);
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        keyboard.press_command(Command::ToggleSwim);
        keyboard.press_command(Command::ToggleFly);
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
        assert!(hero.motilities().contains(Motility::Swim));
        assert!(hero.motilities().contains(Motility::Fly));

        // Holding the keys does not toggle again
        keyboard.update();
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);
        assert!(hero.motilities().contains(Motility::Swim));

        // A second press toggles back
        keyboard.release_command(Command::ToggleSwim);
        keyboard.press_command(Command::ToggleSwim);
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);
        assert!(!hero.motilities().contains(Motility::Swim));
        assert!(hero.motilities().contains(Motility::Fly));
    }

    #[test]
    fn test_flying_crosses_chasm() {
        let mut hero = ready_hero(IVec2::new(0, 0));
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();
        arena.set_tile(IVec2::new(1, 0), Tile::Chasm).unwrap();

        keyboard.press_command(Command::MoveEast);
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);
        assert_eq!(hero.position(), IVec2::ZERO);

        keyboard.press_command(Command::ToggleFly);
        keyboard.update();
        hero.is_waiting_for_inputs(&mut keyboard, &mut arena);
        assert_eq!(hero.position(), IVec2::new(1, 0));
    }

    #[test]
    fn test_rest_until_healed() {
        let mut hero = ready_hero(IVec2::ZERO);
        let mut keyboard = KeyboardState::default();
        let mut arena = open_arena();

        // Nothing to heal: the player is asked again
        keyboard.press_command(Command::RestUntilHealed);
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));

        hero.core_mut().decrease_health(2);
        keyboard.release_command(Command::RestUntilHealed);
        keyboard.press_command(Command::RestUntilHealed);
        assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));

        for _ in 0..2 {
            assert!(!hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
            hero.next_behavior_action()
                .unwrap()
                .perform(&mut hero, &mut arena)
                .unwrap();
        }
        assert_eq!(hero.health(), hero.max_health());
        assert!(hero.is_waiting_for_inputs(&mut keyboard, &mut arena));
    }

    #[test]
    fn test_receiving_damage_interrupts_behavior() {
        let mut hero = Hero::new(IVec2::ZERO, HeroInfo::default());
        let rat = crate::game::monster::Monster::new(
            1,
            MonsterKind::Rat,
            IVec2::ONE,
            GraphicsData::default(),
        );
        let action = Action::attack(Actor::Monster(1), Actor::Hero);

        assert!(hero.active_behavior().is_some());
        hero.on_receive_damage(&action, 1, Some(&rat));
        assert!(hero.active_behavior().is_none());
    }

    #[test]
    fn test_hooks_without_other_party() {
        let mut hero = ready_hero(IVec2::ZERO);
        let action = Action::rest(Actor::Hero);
        hero.on_give_damage(&action, 3, None);
        hero.on_receive_damage(&action, 3, None);
        hero.on_killed(None);
        assert_eq!(hero.health(), hero.max_health());
    }

    #[test]
    fn test_damage_event_lines() {
        let hero = ready_hero(IVec2::ZERO);
        let rat = crate::game::monster::Monster::new(
            1,
            MonsterKind::Rat,
            IVec2::ONE,
            GraphicsData::default(),
        );

        assert_eq!(
            hero.event_line(HeroEvent::GiveDamage, &rat),
            "on_give_damage     :: Hero#0 [20/20] damaged Rat#1 [3/3]"
        );
        assert_eq!(
            hero.event_line(HeroEvent::ReceiveDamage, &rat),
            "on_receive_damage  :: Hero#0 [20/20] was hit by Rat#1 [3/3]"
        );
        assert_eq!(
            hero.event_line(HeroEvent::Killed, &rat),
            "on_killed          :: Hero#0 [20/20] was killed by Rat#1 [3/3]"
        );
    }

    #[test]
    fn test_tileset_hero_swings_its_starting_weapon() {
        let tileset = crate::engine::renderer::Tileset::new(4, 4, 16);
        let hero = Hero::new(IVec2::ZERO, HeroInfo::from_tileset("Hero", &tileset));

        let hits = hero.generate_melee_hits(&hero);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attack().name(), info::STARTING_WEAPON);
        assert_eq!(hits[0].damage(), info::STARTING_WEAPON_DAMAGE);
    }

    #[test]
    fn test_unarmed_hero_punches() {
        let hero = ready_hero(IVec2::ZERO);
        let hits = hero.generate_melee_hits(&hero);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attack().name(), "Punch");
        assert_eq!(hits[0].damage(), PUNCH_POWER);
    }

    #[test]
    fn test_one_hit_per_melee_weapon_scaled_by_strength() {
        let info = HeroInfo {
            strength: Strength::new(10),
            ..HeroInfo::default()
        };
        let mut hero = Hero::new(IVec2::ZERO, info);
        hero.data
            .equipment
            .wield(Weapon::melee("Dagger", 0, 4))
            .unwrap();
        hero.data
            .equipment
            .wield(Weapon::melee("Maul", 15, 10))
            .unwrap();

        let hits = hero.generate_melee_hits(&hero);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].attack().name(), "Dagger");
        assert_relative_eq!(hits[0].scale(), 1.5);
        assert_eq!(hits[0].damage(), 6);
        assert_eq!(hits[1].attack().name(), "Maul");
        assert_relative_eq!(hits[1].scale(), 0.6, epsilon = 1e-6);
        assert_eq!(hits[1].damage(), 6);
    }

    #[test]
    fn test_ranged_weapons_do_not_melee() {
        let mut hero = ready_hero(IVec2::ZERO);
        hero.data
            .equipment
            .wield(Weapon::ranged("Sling", 2, 3))
            .unwrap();

        let hits = hero.generate_melee_hits(&hero);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attack().name(), "Punch");
    }

    #[test]
    fn test_clone_copies_behavior() {
        let hero = Hero::new(IVec2::ZERO, HeroInfo::default());
        let mut copy = hero.clone();
        assert!(copy.active_behavior().is_some());

        copy.mark_as_waiting_for_inputs();
        assert!(hero.active_behavior().is_some());
        assert_eq!(copy.position(), hero.position());
    }

    #[test]
    fn test_draw_queues_sprite() {
        let hero = Hero::new(IVec2::new(1, 0), HeroInfo::default());
        let mut frame = FrameQueue::new();
        hero.draw(&mut frame);

        assert_eq!(frame.sprite_count(), 1);
        assert_eq!(frame.sprites()[0], hero.sprite());
    }
}
