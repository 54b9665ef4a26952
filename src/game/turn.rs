// Turn loop: the hero, then every monster, one turn at a time

use crate::engine::input::KeyboardPoll;
use crate::engine::renderer::{RenderTarget, Tileset};

use super::action::{Action, Actor};
use super::arena::{ArenaError, ArenaLayout, GameArena};
use super::entity::Entity;
use super::hero::{Hero, HeroInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The hero needs player input; nothing happened
    AwaitingInput,
    /// A full turn was played
    Played,
    /// The hero is dead
    HeroDied,
}

pub struct Game {
    hero: Hero,
    arena: GameArena,
    tileset: Tileset,
    turn: u64,
}

impl Game {
    /// Build a game from a parsed layout, spawning its monsters
    pub fn from_layout(
        layout: ArenaLayout,
        hero_name: &str,
        tileset: Tileset,
    ) -> Result<Self, ArenaError> {
        let ArenaLayout {
            mut arena,
            hero_spawn,
            monster_spawns,
        } = layout;

        for (kind, position) in monster_spawns {
            arena.spawn_monster(kind, position, kind.graphics(&tileset))?;
        }

        let hero = Hero::new(hero_spawn, HeroInfo::from_tileset(hero_name, &tileset));
        log::info!("{} enters the arena at {}", hero, hero_spawn);

        Ok(Self::new(hero, arena, tileset))
    }

    pub fn new(hero: Hero, arena: GameArena, tileset: Tileset) -> Self {
        Self {
            hero,
            arena,
            tileset,
            turn: 0,
        }
    }

    /// Play one turn if the hero is ready to act
    pub fn step(&mut self, keyboard: &mut dyn KeyboardPoll) -> TurnOutcome {
        if !self.hero.is_alive() {
            return TurnOutcome::HeroDied;
        }

        if self.hero.is_waiting_for_inputs(keyboard, &mut self.arena) {
            return TurnOutcome::AwaitingInput;
        }

        if let Some(behavior) = self.hero.active_behavior() {
            log::trace!("{} follows {:?}", self.hero, behavior);
        }
        if let Some(action) = self.hero.next_behavior_action() {
            self.perform(action);
        }

        for id in self.arena.monster_ids() {
            if !self.hero.is_alive() {
                break;
            }
            let Some(monster) = self.arena.monster(id).filter(|m| m.is_alive()) else {
                continue;
            };
            let kind = monster.choose_action(self.hero.position());
            self.perform(Action::new(Actor::Monster(id), kind));
        }

        for monster in self.arena.remove_dead() {
            log::info!("{} is dead", monster);
        }

        self.turn += 1;
        log::trace!("Turn {} played", self.turn);

        if self.hero.is_alive() {
            TurnOutcome::Played
        } else {
            log::info!("{} has fallen on turn {}", self.hero, self.turn);
            TurnOutcome::HeroDied
        }
    }

    fn perform(&mut self, action: Action) {
        if let Err(failure) = action.perform(&mut self.hero, &mut self.arena) {
            log::debug!("{:?} failed: {}", action, failure);
        }
    }

    /// Draw tiles, monsters, then the hero on top
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        self.arena.draw_tiles(target, &self.tileset);
        self.arena.draw_monsters(target);
        self.hero.draw(target);
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn arena(&self) -> &GameArena {
        &self.arena
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }
}
