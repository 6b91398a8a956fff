//! Pure rule engine for the 2048 tile-merging game: board values, sliding and
//! merging, random tile spawning, and terminal-state predicates. All session
//! state (score, win/loss progress, the random source) lives in [`Game`] or in
//! the caller; every board operation returns a fresh value.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::{Array2, ArrayViewMut1};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use engine::*;
pub use error::*;
pub use random::*;
pub use types::*;

mod engine;
mod error;
mod random;
mod types;

/// Immutable square grid of tiles. `0` is an empty cell, everything else is a
/// power of two. Squareness and minimum size are established at construction
/// and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Tile>,
}

impl Board {
    /// All-zero `size`x`size` board.
    pub fn empty(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall);
        }
        Ok(Self {
            grid: Array2::zeros((size, size)),
        })
    }

    /// Board from explicit rows, validating the square-grid invariant once.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall);
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(GameError::NotSquare);
        }
        let cells: Vec<Tile> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let grid = Array2::from_shape_vec((size, size), cells).map_err(|_| GameError::NotSquare)?;
        Ok(Self { grid })
    }

    /// Starting board: two tiles spawned sequentially on an empty grid, the
    /// second spawn seeing the board after the first.
    pub fn with_start_tiles<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        let board = Self::empty(size)?;
        let board = board.with_random_tile(rng);
        Ok(board.with_random_tile(rng))
    }

    /// Copy of this board with a new tile in a uniformly chosen empty cell:
    /// a 2 with probability 0.9, otherwise a 4. Returns the board unchanged
    /// when no empty cell exists.
    ///
    /// Draws the cell index first and the tile value second, so seeded
    /// sequences replay identically.
    pub fn with_random_tile<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        let empty: SmallVec<[Pos; 16]> = self.empty_cells().collect();
        if empty.is_empty() {
            log::debug!("board is full, spawn skipped");
            return self.clone();
        }
        // truncation == floor here since next_f64() is non-negative and < 1
        let pick = (rng.next_f64() * empty.len() as f64) as usize;
        let value = if rng.next_f64() < TWO_TILE_CHANCE { 2 } else { 4 };
        let mut next = self.clone();
        next.grid[empty[pick]] = value;
        next
    }

    /// Slide and merge every line towards `direction`.
    ///
    /// Each row (for left/right) or column (for up/down) is collapsed
    /// independently: zeros drop out, equal neighbors merge at most once, and
    /// the line is padded back to length. `moved` is true iff any cell
    /// changed content, so a blocked move can be recognized and skipped by
    /// the caller without spawning a tile.
    pub fn shift(&self, direction: Direction) -> MoveOutcome {
        let mut grid = self.grid.clone();
        let towards_end = matches!(direction, Direction::Right | Direction::Down);
        let lanes = match direction {
            Direction::Left | Direction::Right => grid.rows_mut(),
            Direction::Up | Direction::Down => grid.columns_mut(),
        };

        let mut gained: Score = 0;
        let mut moved = false;
        for mut lane in lanes {
            let (lane_gained, lane_moved) = collapse_lane(&mut lane, towards_end);
            gained += lane_gained;
            moved |= lane_moved;
        }

        MoveOutcome {
            board: Self { grid },
            gained,
            moved,
        }
    }

    /// True iff any tile has reached [`WINNING_TILE`]. Larger merges count
    /// too, so the comparison is `>=`.
    pub fn has_winning_tile(&self) -> bool {
        self.grid.iter().any(|&value| value >= WINNING_TILE)
    }

    /// True iff some move can still change the board: an empty cell exists,
    /// or two equal tiles are horizontally or vertically adjacent. Checking
    /// only right and down neighbors covers every adjacent pair once.
    pub fn has_moves(&self) -> bool {
        let size = self.size();
        for ((row, col), &value) in self.grid.indexed_iter() {
            if value == 0 {
                return true;
            }
            if col + 1 < size && self.grid[(row, col + 1)] == value {
                return true;
            }
            if row + 1 < size && self.grid[(row + 1, col)] == value {
                return true;
            }
        }
        false
    }

    pub fn size(&self) -> usize {
        self.grid.nrows()
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.grid[pos]
    }

    /// Empty cell positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|(pos, _)| pos)
    }

    pub fn count_empty(&self) -> usize {
        self.grid.iter().filter(|&&value| value == 0).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values. Invariant under [`Board::shift`]; only
    /// spawning adds to it.
    pub fn tile_sum(&self) -> u64 {
        self.grid.iter().map(|&value| u64::from(value)).sum()
    }

    /// Escape hatch to the underlying grid.
    pub fn grid(&self) -> &Array2<Tile> {
        &self.grid
    }

    /// Board reflected across the main diagonal (rows become columns).
    pub fn transposed(&self) -> Self {
        Self {
            grid: self.grid.t().to_owned(),
        }
    }
}

impl Index<Pos> for Board {
    type Output = Tile;

    fn index(&self, pos: Pos) -> &Tile {
        &self.grid[pos]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for &value in row.iter() {
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{value:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result of sliding a board in one direction. The board is always freshly
/// allocated, even when nothing moved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    pub gained: Score,
    pub moved: bool,
}

/// Collapse one line in place towards its start (`towards_end == false`) or
/// its end. Returns the score gained and whether any cell changed.
fn collapse_lane(lane: &mut ArrayViewMut1<'_, Tile>, towards_end: bool) -> (Score, bool) {
    let len = lane.len();
    let compact: SmallVec<[Tile; 8]> = if towards_end {
        lane.iter().rev().filter(|&&value| value != 0).copied().collect()
    } else {
        lane.iter().filter(|&&value| value != 0).copied().collect()
    };

    // Single pass in the direction of travel; skipping past a merged pair is
    // what keeps a merged tile from merging again in the same move.
    let mut merged: SmallVec<[Tile; 8]> = SmallVec::with_capacity(len);
    let mut gained: Score = 0;
    let mut i = 0;
    while i < compact.len() {
        if i + 1 < compact.len() && compact[i] == compact[i + 1] {
            let combined = compact[i] * 2;
            gained += combined;
            merged.push(combined);
            i += 2;
        } else {
            merged.push(compact[i]);
            i += 1;
        }
    }
    merged.resize(len, 0);

    let mut changed = false;
    for (offset, slot) in lane.iter_mut().enumerate() {
        let value = if towards_end {
            merged[len - 1 - offset]
        } else {
            merged[offset]
        };
        if *slot != value {
            *slot = value;
            changed = true;
        }
    }
    (gained, changed)
}
