// Press buffering so taps between turns are not lost

use super::action::Command;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a press remains in the buffer.
/// Longer than the turn pacing interval, whatever the frame rate.
pub const BUFFER_DURATION: Duration = Duration::from_millis(250);

/// Represents a single buffered press
#[derive(Debug, Clone, Copy)]
pub struct BufferedPress {
    pub command: Command,
    pub pressed_at: Instant,
}

impl BufferedPress {
    pub fn new(command: Command, pressed_at: Instant) -> Self {
        Self {
            command,
            pressed_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.pressed_at) >= BUFFER_DURATION
    }
}

/// Buffers presses until the turn loop consumes them
#[derive(Debug, Default)]
pub struct PressBuffer {
    buffer: VecDeque<BufferedPress>,
}

impl PressBuffer {
    /// Add a press to the buffer, refreshing it if already present
    pub fn push(&mut self, command: Command, now: Instant) {
        if let Some(existing) = self.buffer.iter_mut().find(|p| p.command == command) {
            existing.pressed_at = now;
            return;
        }

        self.buffer.push_back(BufferedPress::new(command, now));
    }

    /// Remove a buffered press, returning whether it was there
    pub fn consume(&mut self, command: Command) -> bool {
        match self.buffer.iter().position(|p| p.command == command) {
            Some(index) => {
                self.buffer.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop the presses older than `BUFFER_DURATION`
    pub fn update(&mut self, now: Instant) {
        self.buffer.retain(|p| !p.is_expired(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(buffer: &PressBuffer, command: Command) -> bool {
        buffer.buffer.iter().any(|p| p.command == command)
    }

    #[test]
    fn test_push_and_consume() {
        let mut buffer = PressBuffer::default();
        buffer.push(Command::ToggleFly, Instant::now());
        assert!(has(&buffer, Command::ToggleFly));
        assert!(buffer.consume(Command::ToggleFly));
        assert!(!buffer.consume(Command::ToggleFly));
        assert!(buffer.buffer.is_empty());
    }

    #[test]
    fn test_duplicate_push_is_refreshed_not_doubled() {
        let start = Instant::now();
        let mut buffer = PressBuffer::default();
        buffer.push(Command::MoveEast, start);
        buffer.push(Command::MoveEast, start + Duration::from_millis(200));
        assert_eq!(buffer.buffer.len(), 1);

        // The refresh restarted the clock
        buffer.update(start + BUFFER_DURATION);
        assert!(has(&buffer, Command::MoveEast));
    }

    #[test]
    fn test_presses_expire_after_duration() {
        let start = Instant::now();
        let mut buffer = PressBuffer::default();
        buffer.push(Command::MoveNorth, start);

        buffer.update(start + BUFFER_DURATION - Duration::from_millis(1));
        assert!(has(&buffer, Command::MoveNorth));

        buffer.update(start + BUFFER_DURATION);
        assert!(!has(&buffer, Command::MoveNorth));
    }

    #[test]
    fn test_many_frames_do_not_expire_a_fresh_press() {
        let start = Instant::now();
        let mut buffer = PressBuffer::default();
        buffer.push(Command::ToggleSwim, start);

        // An uncapped loop updates far more often than the turn pacer lets turns through
        for frame in 0..1000 {
            buffer.update(start + Duration::from_micros(frame * 100));
        }
        assert!(has(&buffer, Command::ToggleSwim));
    }
}
