use serde::{Deserialize, Serialize};

/// Value held by a single cell; `0` is empty, anything else is a power of two.
pub type Tile = u32;

/// Points granted by merges.
pub type Score = u32;

/// `(row, column)` cell position.
pub type Pos = (usize, usize);

/// Smallest board the engine accepts; anything below cannot hold the two
/// starting tiles.
pub const MIN_BOARD_SIZE: usize = 2;

/// Reaching this tile (or a larger one) wins the game.
pub const WINNING_TILE: Tile = 2048;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_TILE_CHANCE: f64 = 0.9;

/// A direction to slide/merge tiles in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}
