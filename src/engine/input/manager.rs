// Input manager - routes winit keyboard events to the keyboard state

use super::action::{Command, InputSource};
use super::config::InputConfig;
use super::player::{KeyboardPoll, KeyboardState};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Owns the key bindings and the resulting keyboard state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    keyboard: KeyboardState,
}

impl InputManager {
    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_source(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    fn process_source(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        let Some(command) = self.config.get_command(source) else {
            return;
        };

        match state {
            // OS key repeat is ignored, the turn pacer handles held keys
            ElementState::Pressed if !repeat => self.keyboard.press(source, command),
            ElementState::Pressed => {}
            ElementState::Released => self.keyboard.release(source, command),
        }
    }

    /// Advance keyboard state. Call once per frame after processing all events.
    pub fn update(&mut self) {
        self.keyboard.update();
    }

    /// Consume a press of a meta command (pause, quit)
    pub fn take_press(&mut self, command: Command) -> bool {
        self.keyboard.take_press(command)
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bound_key_press_reaches_keyboard() {
        let mut manager = InputManager::default();
        manager.process_source(
            InputSource::key(KeyCode::ArrowUp),
            ElementState::Pressed,
            false,
        );

        assert!(manager.keyboard().is_pressed(Command::MoveNorth));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::default();
        manager.process_source(InputSource::key(KeyCode::KeyQ), ElementState::Pressed, false);

        for command in [Command::MoveWest, Command::Quit, Command::Pause] {
            assert!(!manager.keyboard().is_pressed(command));
            assert!(!manager.take_press(command));
        }
    }

    #[test]
    fn test_os_repeat_does_not_press_again() {
        let mut manager = InputManager::default();
        let source = InputSource::key(KeyCode::PageUp);
        manager.process_source(source, ElementState::Pressed, false);
        assert!(manager.take_press(Command::ToggleFly));

        manager.update();
        manager.process_source(source, ElementState::Pressed, true);
        assert!(!manager.take_press(Command::ToggleFly));
    }

    #[test]
    fn test_release() {
        let mut manager = InputManager::default();
        let source = InputSource::key(KeyCode::ArrowDown);
        manager.process_source(source, ElementState::Pressed, false);
        manager.update();
        manager.process_source(source, ElementState::Released, false);

        assert!(!manager.keyboard().is_pressed(Command::MoveSouth));
    }

    #[test]
    fn test_rebinding_through_config() {
        let mut manager = InputManager::default();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyL), Command::MoveEast);
        manager.process_source(InputSource::key(KeyCode::KeyL), ElementState::Pressed, false);

        assert!(manager.keyboard().is_pressed(Command::MoveEast));
    }

    #[test]
    fn test_two_keys_on_one_command() {
        let mut manager = InputManager::default();
        let arrow = InputSource::key(KeyCode::ArrowLeft);
        let vi = InputSource::key(KeyCode::KeyH);
        manager.config_mut().bind(vi, Command::MoveWest);

        manager.process_source(arrow, ElementState::Pressed, false);
        manager.process_source(vi, ElementState::Pressed, false);
        manager.process_source(arrow, ElementState::Released, false);
        assert!(manager.keyboard().is_pressed(Command::MoveWest));

        manager.process_source(vi, ElementState::Released, false);
        assert!(!manager.keyboard().is_pressed(Command::MoveWest));
    }
}
