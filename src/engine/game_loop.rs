/// Turn pacing for the main loop
///
/// The hero polls held keys, so without pacing a held arrow would move the
/// hero once per rendered frame. `TurnPacer` lets at most one turn through
/// per interval while rendering keeps running every frame.
use std::time::{Duration, Instant};

/// Minimum time between two turns (held key repeat rate)
pub const DEFAULT_TURN_INTERVAL: Duration = Duration::from_millis(120);

/// Turn pacing state
pub struct TurnPacer {
    /// Minimum time between turns
    interval: Duration,

    /// When the last turn was let through, if any
    last_turn: Option<Instant>,

    /// Whether the game is paused
    paused: bool,
}

impl TurnPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_turn: None,
            paused: false,
        }
    }

    /// Begin a new frame, returns whether a turn may be played
    pub fn begin_frame(&mut self) -> bool {
        if self.paused {
            return false;
        }

        match self.last_turn {
            Some(last) => Instant::now().duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Record that a turn was actually played this frame
    pub fn turn_played(&mut self) {
        self.last_turn = Some(Instant::now());
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TurnPacer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_INTERVAL)
    }
}
