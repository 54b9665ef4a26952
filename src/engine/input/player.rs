// Keyboard state as seen by the turn loop

use super::action::{Command, InputSource};
use super::buffer::PressBuffer;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Keyboard-state poll used by the hero to read player intent.
///
/// `is_pressed` reports held commands; `take_press` consumes a buffered
/// press so edge-triggered commands fire once per key press.
pub trait KeyboardPoll {
    fn is_pressed(&self, command: Command) -> bool;

    fn take_press(&mut self, command: Command) -> bool;
}

/// Tracks held commands and the presses the turn loop has not seen yet
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// Keys currently holding each command down. A command stays held
    /// until every key bound to it is released.
    held: HashMap<Command, HashSet<InputSource>>,

    /// Presses not yet consumed by the turn loop
    buffer: PressBuffer,
}

impl KeyboardState {
    /// Register a key going down
    pub(crate) fn press(&mut self, source: InputSource, command: Command) {
        let sources = self.held.entry(command).or_default();
        let was_held = !sources.is_empty();
        if sources.insert(source) && !was_held {
            self.buffer.push(command, Instant::now());
        }
    }

    /// Register a key going up
    pub(crate) fn release(&mut self, source: InputSource, command: Command) {
        if let Some(sources) = self.held.get_mut(&command) {
            sources.remove(&source);
            if sources.is_empty() {
                self.held.remove(&command);
            }
        }
    }

    /// Expire stale presses. Call once per frame after processing all events.
    pub(crate) fn update(&mut self) {
        self.buffer.update(Instant::now());
    }
}

impl KeyboardPoll for KeyboardState {
    fn is_pressed(&self, command: Command) -> bool {
        self.held.contains_key(&command)
    }

    fn take_press(&mut self, command: Command) -> bool {
        self.buffer.consume(command)
    }
}

#[cfg(test)]
impl KeyboardState {
    /// Press a command through its default key
    pub(crate) fn press_command(&mut self, command: Command) {
        self.press(super::action::default_source(command), command);
    }

    /// Release a command's default key
    pub(crate) fn release_command(&mut self, command: Command) {
        self.release(super::action::default_source(command), command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_press_command() {
        let mut keyboard = KeyboardState::default();
        keyboard.press_command(Command::MoveEast);
        assert!(keyboard.is_pressed(Command::MoveEast));
        assert!(!keyboard.is_pressed(Command::MoveWest));
    }

    #[test]
    fn test_release_command() {
        let mut keyboard = KeyboardState::default();
        keyboard.press_command(Command::MoveEast);
        keyboard.update();
        keyboard.release_command(Command::MoveEast);
        assert!(!keyboard.is_pressed(Command::MoveEast));
    }

    #[test]
    fn test_take_press_fires_once_per_press() {
        let mut keyboard = KeyboardState::default();
        keyboard.press_command(Command::ToggleSwim);
        assert!(keyboard.take_press(Command::ToggleSwim));
        assert!(!keyboard.take_press(Command::ToggleSwim));

        // Still held, but holding does not produce another press
        keyboard.update();
        keyboard.press_command(Command::ToggleSwim);
        assert!(!keyboard.take_press(Command::ToggleSwim));
    }

    #[test]
    fn test_tap_survives_release() {
        let mut keyboard = KeyboardState::default();
        keyboard.press_command(Command::MoveNorth);
        keyboard.release_command(Command::MoveNorth);
        keyboard.update();

        assert!(!keyboard.is_pressed(Command::MoveNorth));
        assert!(keyboard.take_press(Command::MoveNorth));
    }

    #[test]
    fn test_release_unpressed_command() {
        let mut keyboard = KeyboardState::default();
        keyboard.release_command(Command::MoveNorth);
        assert!(!keyboard.is_pressed(Command::MoveNorth));
    }

    #[test]
    fn test_command_held_until_every_key_released() {
        let arrow = InputSource::key(KeyCode::ArrowLeft);
        let vi = InputSource::key(KeyCode::KeyH);
        let mut keyboard = KeyboardState::default();

        keyboard.press(arrow, Command::MoveWest);
        keyboard.press(vi, Command::MoveWest);
        keyboard.release(arrow, Command::MoveWest);
        assert!(keyboard.is_pressed(Command::MoveWest));

        keyboard.release(vi, Command::MoveWest);
        assert!(!keyboard.is_pressed(Command::MoveWest));
    }

    #[test]
    fn test_second_key_on_held_command_is_not_a_new_press() {
        let arrow = InputSource::key(KeyCode::ArrowLeft);
        let vi = InputSource::key(KeyCode::KeyH);
        let mut keyboard = KeyboardState::default();

        keyboard.press(arrow, Command::MoveWest);
        assert!(keyboard.take_press(Command::MoveWest));
        keyboard.press(vi, Command::MoveWest);
        assert!(!keyboard.take_press(Command::MoveWest));
    }
}
