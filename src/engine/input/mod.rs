// Input handling system
//
// Translates winit keyboard events into hero commands and exposes them to the
// turn loop through the `KeyboardPoll` trait.
//
// ## Architecture
//
// - `action`: Defines commands and default key bindings
// - `buffer`: Time-based press buffering so taps between turns are not lost
// - `player`: Keyboard state and the `KeyboardPoll` trait
// - `config`: Key binding and remapping
// - `manager`: Routes winit events into the keyboard state
//
// ## Usage Example
//
// ```rust
// use engine::input::{Command, InputManager, KeyboardPoll};
//
// let mut input = InputManager::default();
// for (source, command) in action::vi_key_bindings() {
//     input.config_mut().bind(source, command);
// }
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once a turn is allowed
// game.step(input.keyboard_mut());
//
// // At the end of each frame
// input.update();
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Command;
pub use manager::InputManager;
pub use player::KeyboardPoll;
