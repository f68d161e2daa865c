//! Reversi core - rules and search
//!
//! This crate provides the game logic for Reversi/Othello:
//! - Board state (8x8 grid, disc colors)
//! - Rule engine (capture computation, move generation, scoring)
//! - Depth-limited minimax search with alpha-beta pruning
//! - Player abstraction for turn loops

pub mod board;
pub mod game;
pub mod player;
pub mod position;
pub mod search;

// Re-exports for convenient access
pub use board::{Board, Cell, Color, Move, BOARD_SIZE, DIRECTIONS};
pub use game::{GameError, Outcome};
pub use player::{AlphaBetaPlayer, Player};
pub use position::Position;
pub use search::{best_move, disc_differential, search, SearchResult};
