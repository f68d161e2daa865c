//! Match command - play a series of games between two AIs
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use reversi_core::{AlphaBetaPlayer, Board, Color, Move, Outcome, Player, Position};

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Search depth for the black AI
    #[arg(long, default_value = "4")]
    pub black_depth: u32,

    /// Search depth for the white AI
    #[arg(long, default_value = "4")]
    pub white_depth: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    outcome: Outcome,
    moves_played: usize,
    black_score: u32,
    white_score: u32,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    games: Vec<GameRecord>,
    black_wins: usize,
    white_wins: usize,
    draws: usize,
    avg_moves: f32,
}

/// Run the match command
pub fn run(args: MatchArgs) -> Result<()> {
    tracing::info!(
        "Starting match: {} games, black depth {}, white depth {}",
        args.games,
        args.black_depth,
        args.white_depth
    );

    let results = play_match(&args);
    report_results(&results, &args)?;
    Ok(())
}

/// Play all games in the match
fn play_match(args: &MatchArgs) -> MatchResults {
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        let record = play_single_game(game_num + 1, args.black_depth, args.white_depth);

        tracing::info!(
            "Game {}: {:?} ({} moves, {}-{})",
            record.game_number,
            record.outcome,
            record.moves_played,
            record.black_score,
            record.white_score
        );

        games.push(record);
    }

    compute_match_statistics(games)
}

/// Play one game to completion (both sides out of moves)
fn play_single_game(game_number: usize, black_depth: u32, white_depth: u32) -> GameRecord {
    let mut black = AlphaBetaPlayer::new(black_depth);
    let mut white = AlphaBetaPlayer::new(white_depth);

    let position = Position::initial();
    let mut board = position.board;
    let mut to_move = position.to_move;
    let mut moves_played = 0;
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 {
        let player: &mut dyn Player = match to_move {
            Color::Black => &mut black,
            Color::White => &mut white,
        };

        match player.produce_move(&board, to_move) {
            Some(mv) => {
                board = apply_or_skip(board, mv, to_move);
                moves_played += 1;
                consecutive_passes = 0;
            }
            None => consecutive_passes += 1,
        }

        to_move = to_move.opponent();
    }

    let (black_score, white_score) = board.score();
    GameRecord {
        game_number,
        outcome: board.outcome(),
        moves_played,
        black_score,
        white_score,
    }
}

/// The AI only proposes moves from `legal_moves`, so `apply` cannot
/// fail here; a failure would be a rule-engine bug worth surfacing.
fn apply_or_skip(board: Board, mv: Move, color: Color) -> Board {
    match board.apply(mv, color) {
        Ok(next) => next,
        Err(err) => {
            tracing::error!("search produced an illegal move: {err}");
            board
        }
    }
}

/// Aggregate per-game records into match totals
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let black_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Winner(Color::Black))
        .count();
    let white_wins = games
        .iter()
        .filter(|g| g.outcome == Outcome::Winner(Color::White))
        .count();
    let draws = games.iter().filter(|g| g.outcome == Outcome::Draw).count();

    let avg_moves = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.moves_played).sum::<usize>() as f32 / games.len() as f32
    };

    MatchResults {
        games,
        black_wins,
        white_wins,
        draws,
        avg_moves,
    }
}

/// Report match results as text or JSON
fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Match results ({} games):", results.games.len());
    println!("  Black wins: {}", results.black_wins);
    println!("  White wins: {}", results.white_wins);
    println!("  Draws:      {}", results.draws);
    println!("  Avg moves:  {:.1}", results.avg_moves);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_game_completes() {
        let record = play_single_game(1, 1, 1);
        assert_ne!(record.outcome, Outcome::Undecided);
        // Both start discs survive; each move adds exactly one disc
        assert_eq!(
            (record.black_score + record.white_score) as usize,
            4 + record.moves_played
        );
    }

    #[test]
    fn test_statistics() {
        let games = vec![
            GameRecord {
                game_number: 1,
                outcome: Outcome::Winner(Color::Black),
                moves_played: 60,
                black_score: 40,
                white_score: 24,
            },
            GameRecord {
                game_number: 2,
                outcome: Outcome::Draw,
                moves_played: 58,
                black_score: 31,
                white_score: 31,
            },
        ];

        let results = compute_match_statistics(games);
        assert_eq!(results.black_wins, 1);
        assert_eq!(results.white_wins, 0);
        assert_eq!(results.draws, 1);
        assert_eq!(results.avg_moves, 59.0);
    }
}
