//! Rule engine: capture computation, move generation, move application

use crate::board::{Board, Cell, Color, Move, BOARD_SIZE, DIRECTIONS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule engine errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move captures nothing: target occupied, off the board, or no
    /// bracketed run of opponent discs in any direction
    #[error("illegal move at {0}: no discs captured")]
    IllegalMove(Move),
}

/// Result of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Undecided,
    Winner(Color),
    Draw,
}

impl Board {
    // ========================================================================
    // CAPTURE COMPUTATION
    // ========================================================================

    /// Compute every opponent disc that playing `mv` as `color` would
    /// flip. Empty result means the move is illegal: target occupied,
    /// off the board, or no direction holds a run of opponent discs
    /// bounded on the far end by `color`.
    pub fn captures(&self, mv: Move, color: Color) -> Vec<Move> {
        let mut flipped = Vec::new();

        // Occupied or out-of-range targets capture nothing
        if self.get(mv.row, mv.col) != Some(Cell::Empty) {
            return flipped;
        }

        let own = Cell::from(color);
        let opponent = Cell::from(color.opponent());

        for (dr, dc) in DIRECTIONS {
            let mut r = mv.row as i8 + dr;
            let mut c = mv.col as i8 + dc;
            let mut run = Vec::new();

            // Bounds re-checked every step so edge scans never wrap
            while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
                match self.get(r as usize, c as usize) {
                    Some(cell) if cell == opponent => {
                        run.push(Move::new(r as usize, c as usize));
                        r += dr;
                        c += dc;
                    }
                    Some(cell) if cell == own => {
                        // Run is bracketed by our own disc: commit it
                        flipped.extend(run);
                        break;
                    }
                    // Empty cell ends the scan with nothing committed
                    _ => break,
                }
            }
        }

        flipped
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// All legal moves for `color`, in row-major order. The order is
    /// part of the contract: search keeps the first move reaching the
    /// best score, so ties resolve to the lowest (row, col).
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let mv = Move::new(row, col);
                if !self.captures(mv, color).is_empty() {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Apply `mv` for `color`, returning the resulting board. The
    /// receiver is untouched; searches clone freely. Fails with
    /// [`GameError::IllegalMove`] when nothing would be captured.
    pub fn apply(&self, mv: Move, color: Color) -> Result<Board, GameError> {
        let flipped = self.captures(mv, color);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove(mv));
        }

        let mut next = self.clone();
        let own = Cell::from(color);
        next.set(mv.row, mv.col, own);
        for disc in flipped {
            next.set(disc.row, disc.col, own);
        }
        Ok(next)
    }

    // ========================================================================
    // SCORING
    // ========================================================================

    /// Disc counts as (black, white)
    pub fn score(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for (_, _, cell) in self.cells() {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// Game result. `Undecided` while either color still has a legal
    /// move; once neither can move, whoever holds more discs wins.
    pub fn outcome(&self) -> Outcome {
        if !self.legal_moves(Color::Black).is_empty()
            || !self.legal_moves(Color::White).is_empty()
        {
            return Outcome::Undecided;
        }

        let (black, white) = self.score();
        if black > white {
            Outcome::Winner(Color::Black)
        } else if white > black {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Draw
        }
    }
}
