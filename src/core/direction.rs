// Ordinal directions on the tile grid

use glam::IVec2;

/// One of the eight ordinal directions, or no direction at all.
///
/// Grid rows grow downward, so north is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight real directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Grid offset of a single step in this direction
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::N => IVec2::new(0, -1),
            Direction::NE => IVec2::new(1, -1),
            Direction::E => IVec2::new(1, 0),
            Direction::SE => IVec2::new(1, 1),
            Direction::S => IVec2::new(0, 1),
            Direction::SW => IVec2::new(-1, 1),
            Direction::W => IVec2::new(-1, 0),
            Direction::NW => IVec2::new(-1, -1),
        }
    }

    /// Direction of the single step that brings `from` closest to `to`
    pub fn toward(from: IVec2, to: IVec2) -> Self {
        let step = (to - from).signum();
        Self::ALL
            .into_iter()
            .find(|dir| dir.offset() == step)
            .unwrap_or(Direction::None)
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}
