// Hero command definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents every command the player can issue to the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Movement
    MoveWest,
    MoveEast,
    MoveNorth,
    MoveSouth,

    // Motility toggles
    ToggleSwim,
    ToggleFly,

    // Behaviours
    RestUntilHealed,

    // Meta commands
    Pause,
    Quit,
}

/// Represents an input source. Only the keyboard drives the hero for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings for the hero
pub fn default_hero_bindings() -> Vec<(InputSource, Command)> {
    vec![
        // Movement (arrow keys)
        (InputSource::key(KeyCode::ArrowLeft), Command::MoveWest),
        (InputSource::key(KeyCode::ArrowRight), Command::MoveEast),
        (InputSource::key(KeyCode::ArrowUp), Command::MoveNorth),
        (InputSource::key(KeyCode::ArrowDown), Command::MoveSouth),
        // Motilities
        (InputSource::key(KeyCode::PageDown), Command::ToggleSwim),
        (InputSource::key(KeyCode::PageUp), Command::ToggleFly),
        (InputSource::key(KeyCode::Space), Command::RestUntilHealed),
    ]
}

/// Alternative movement keys (h/j/k/l), bound on top of the arrows
pub fn vi_key_bindings() -> Vec<(InputSource, Command)> {
    vec![
        (InputSource::key(KeyCode::KeyH), Command::MoveWest),
        (InputSource::key(KeyCode::KeyL), Command::MoveEast),
        (InputSource::key(KeyCode::KeyK), Command::MoveNorth),
        (InputSource::key(KeyCode::KeyJ), Command::MoveSouth),
    ]
}

/// Bindings handled by the main loop rather than the hero
pub fn global_bindings() -> Vec<(InputSource, Command)> {
    vec![
        (InputSource::key(KeyCode::KeyP), Command::Pause),
        (InputSource::key(KeyCode::Escape), Command::Quit),
    ]
}

/// First default key bound to a command
#[cfg(test)]
pub(crate) fn default_source(command: Command) -> InputSource {
    default_hero_bindings()
        .into_iter()
        .chain(global_bindings())
        .find(|(_, bound)| *bound == command)
        .map(|(source, _)| source)
        .unwrap_or_else(|| panic!("{:?} has no default key", command))
}
