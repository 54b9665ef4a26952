// Key binding configuration and remapping

use super::action::{default_hero_bindings, global_bindings, Command, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to commands. Several keys may share a command.
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Command>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind an input source to a command, replacing what it was bound to
    pub fn bind(&mut self, source: InputSource, command: Command) {
        if let Some(previous) = self.bindings.insert(source, command) {
            if previous != command {
                log::debug!("{:?} rebound from {:?} to {:?}", source, previous, command);
            }
        }
    }

    /// Get the command bound to an input source
    pub fn get_command(&self, source: InputSource) -> Option<Command> {
        self.bindings.get(&source).copied()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Reset to the default hero and global bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, command) in default_hero_bindings().into_iter().chain(global_bindings()) {
            self.bind(source, command);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::vi_key_bindings;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_command() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyH);
        config.bind(source, Command::MoveWest);

        assert_eq!(config.get_command(source), Some(Command::MoveWest));
    }

    #[test]
    fn test_vi_keys_alongside_arrows() {
        let mut config = InputConfig::default();
        for (source, command) in vi_key_bindings() {
            config.bind(source, command);
        }

        assert_eq!(
            config.get_command(InputSource::key(KeyCode::KeyH)),
            Some(Command::MoveWest)
        );
        assert_eq!(
            config.get_command(InputSource::key(KeyCode::ArrowLeft)),
            Some(Command::MoveWest)
        );
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyH);

        config.bind(source, Command::MoveWest);
        config.bind(source, Command::MoveEast);

        assert_eq!(config.get_command(source), Some(Command::MoveEast));
    }

    #[test]
    fn test_default_includes_global_bindings() {
        let config = InputConfig::default();
        assert_eq!(
            config.get_command(InputSource::key(KeyCode::Escape)),
            Some(Command::Quit)
        );
        assert_eq!(
            config.get_command(InputSource::key(KeyCode::PageUp)),
            Some(Command::ToggleFly)
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(InputSource::key(KeyCode::KeyZ), Command::MoveWest);
        config.reset_to_defaults();

        assert_eq!(config.get_command(InputSource::key(KeyCode::KeyZ)), None);
        assert_eq!(
            config.get_command(InputSource::key(KeyCode::PageDown)),
            Some(Command::ToggleSwim)
        );
    }
}
