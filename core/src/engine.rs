use serde::{Deserialize, Serialize};

use crate::*;

/// Progress of one play session. `Won` is sticky: play may continue past the
/// winning tile, but the session never drops back to `Playing` without a
/// restart. `Over` is only reached from `Playing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Over,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A play session: the current board plus the mutable state the board engine
/// itself stays free of (score, move count, win/loss progress, the random
/// source). Serializes as a whole, which covers snapshot/share use.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game<R> {
    board: Board,
    score: Score,
    move_count: u32,
    state: GameState,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// New session on a `size`x`size` board with the two starting tiles.
    pub fn new(size: usize, mut rng: R) -> Result<Self> {
        let board = Board::with_start_tiles(size, &mut rng)?;
        Ok(Self {
            board,
            score: 0,
            move_count: 0,
            state: GameState::default(),
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Slide the board, spawn a tile if anything moved, and advance the
    /// session state (winning tile checked before the dead-board check).
    ///
    /// A blocked move does not consume a turn, spawn a tile, or score; the
    /// returned outcome has `moved == false` and the unchanged board. The
    /// outcome board of a successful move includes the spawned tile.
    pub fn slide(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let outcome = self.board.shift(direction);
        if !outcome.moved {
            return Ok(outcome);
        }

        self.board = outcome.board.with_random_tile(&mut self.rng);
        self.score += outcome.gained;
        self.move_count += 1;

        if matches!(self.state, GameState::Playing) {
            if self.board.has_winning_tile() {
                self.state = GameState::Won;
            } else if !self.board.has_moves() {
                self.state = GameState::Over;
            }
        }

        Ok(MoveOutcome {
            board: self.board.clone(),
            gained: outcome.gained,
            moved: true,
        })
    }

    /// Discard the board and start over on the same size with a fresh source.
    pub fn restart(&mut self, mut rng: R) -> Result<()> {
        self.board = Board::with_start_tiles(self.board.size(), &mut rng)?;
        self.rng = rng;
        self.score = 0;
        self.move_count = 0;
        self.state = GameState::default();
        Ok(())
    }
}
