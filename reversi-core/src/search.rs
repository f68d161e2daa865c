//! Depth-limited minimax with alpha-beta pruning
//!
//! The evaluation is the raw disc differential, always taken from the
//! perspective of the color that is maximizing at the root of the
//! search. No move ordering, no transposition table: work is
//! exponential in `depth`, so callers keep it small (the CLI defaults
//! to 4).

use crate::board::{Board, Color, Move};

/// Best move found and its backed-up score. `mv` is `None` at leaves
/// (depth exhausted or no legal moves).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Option<Move>,
    pub score: i32,
}

/// Disc differential for `color`: own count minus opponent count
pub fn disc_differential(board: &Board, color: Color) -> i32 {
    let (black, white) = board.score();
    match color {
        Color::Black => black as i32 - white as i32,
        Color::White => white as i32 - black as i32,
    }
}

/// Choose a move for `color`, searching `depth` plies ahead
pub fn best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    search(board, color, true, depth, i32::MIN, i32::MAX).mv
}

/// Minimax with alpha-beta over the game tree rooted at `board` with
/// `color` to move. `maximizing` is this ply's role; it alternates with
/// the ply, so the root maximizer's color is recoverable at any node
/// (and in particular at leaves, where the sign convention needs it).
///
/// A side with no legal moves is evaluated as a leaf rather than
/// passing; pruning never changes the root's (move, score).
pub fn search(
    board: &Board,
    color: Color,
    maximizing: bool,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    let moves = board.legal_moves(color);

    if depth == 0 || moves.is_empty() {
        // Score from the root maximizer's point of view: positive when
        // the root's color is ahead, regardless of whose turn it is here
        let root_color = if maximizing { color } else { color.opponent() };
        return SearchResult {
            mv: None,
            score: disc_differential(board, root_color),
        };
    }

    if maximizing {
        let mut best = SearchResult {
            mv: None,
            score: i32::MIN,
        };
        for mv in moves {
            let child = board
                .apply(mv, color)
                .expect("legal_moves produced an illegal move");
            let eval = search(&child, color.opponent(), false, depth - 1, alpha, beta);
            // Strict comparison keeps the first (row-major) move on ties
            if eval.score > best.score {
                best = SearchResult {
                    mv: Some(mv),
                    score: eval.score,
                };
                alpha = alpha.max(best.score);
            }
            if beta <= alpha {
                return best;
            }
        }
        best
    } else {
        let mut best = SearchResult {
            mv: None,
            score: i32::MAX,
        };
        for mv in moves {
            let child = board
                .apply(mv, color)
                .expect("legal_moves produced an illegal move");
            let eval = search(&child, color.opponent(), true, depth - 1, alpha, beta);
            if eval.score < best.score {
                best = SearchResult {
                    mv: Some(mv),
                    score: eval.score,
                };
                beta = beta.min(best.score);
            }
            if beta <= alpha {
                return best;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Plain minimax without pruning, used to cross-check alpha-beta
    fn minimax(board: &Board, color: Color, maximizing: bool, depth: u32) -> SearchResult {
        let moves = board.legal_moves(color);

        if depth == 0 || moves.is_empty() {
            let root_color = if maximizing { color } else { color.opponent() };
            return SearchResult {
                mv: None,
                score: disc_differential(board, root_color),
            };
        }

        let mut best = SearchResult {
            mv: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };
        for mv in moves {
            let child = board.apply(mv, color).unwrap();
            let eval = minimax(&child, color.opponent(), !maximizing, depth - 1);
            let better = if maximizing {
                eval.score > best.score
            } else {
                eval.score < best.score
            };
            if better {
                best = SearchResult {
                    mv: Some(mv),
                    score: eval.score,
                };
            }
        }
        best
    }

    #[test]
    fn test_depth_one_from_start() {
        let board = Board::new();
        let result = search(&board, Color::Black, true, 1, i32::MIN, i32::MAX);

        // All four openings flip exactly one disc (score 4 - 1 = 3);
        // the row-major first one wins the tie
        assert_eq!(result.mv, Some(Move::new(2, 3)));
        assert_eq!(result.score, 3);
        assert!(board
            .legal_moves(Color::Black)
            .contains(&result.mv.unwrap()));
    }

    #[test]
    fn test_leaf_sign_convention() {
        // Black ahead 4-1 after the opening
        let board = Board::new().apply(Move::new(2, 3), Color::Black).unwrap();

        // Leaf requested at a maximizing ply: positive for the side to move
        let max_leaf = search(&board, Color::Black, true, 0, i32::MIN, i32::MAX);
        assert_eq!(max_leaf.score, 3);
        assert_eq!(max_leaf.mv, None);

        // Same board at a minimizing white ply: root maximizer is black,
        // so the score stays positive
        let min_leaf = search(&board, Color::White, false, 0, i32::MIN, i32::MAX);
        assert_eq!(min_leaf.score, 3);

        // Root maximizer white sees the mirror image
        let white_leaf = search(&board, Color::White, true, 0, i32::MIN, i32::MAX);
        assert_eq!(white_leaf.score, -3);
    }

    #[test]
    fn test_no_moves_is_a_leaf() {
        let mut board = Board::empty();
        board.set(0, 0, Cell::Black);
        board.set(0, 1, Cell::Black);
        board.set(7, 7, Cell::White);
        assert!(board.legal_moves(Color::White).is_empty());

        // Depth remaining, but white is stuck: evaluated immediately
        let result = search(&board, Color::White, true, 5, i32::MIN, i32::MAX);
        assert_eq!(result.mv, None);
        assert_eq!(result.score, 1 - 2);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        for depth in 0..=3 {
            let board = Board::new();
            let pruned = search(&board, Color::Black, true, depth, i32::MIN, i32::MAX);
            let plain = minimax(&board, Color::Black, true, depth);
            assert_eq!(pruned, plain, "depth {depth}");
        }

        // Also from a mid-game position, for both root colors
        let board = Board::new()
            .apply(Move::new(2, 3), Color::Black)
            .unwrap()
            .apply(Move::new(2, 2), Color::White)
            .unwrap();
        for color in [Color::Black, Color::White] {
            for depth in 1..=3 {
                let pruned = search(&board, color, true, depth, i32::MIN, i32::MAX);
                let plain = minimax(&board, color, true, depth);
                assert_eq!(pruned, plain, "{color} depth {depth}");
            }
        }
    }

    #[test]
    fn test_best_move_is_legal() {
        let board = Board::new();
        for depth in 1..=4 {
            let mv = best_move(&board, Color::White, depth).unwrap();
            assert!(board.legal_moves(Color::White).contains(&mv));
        }
    }
}
