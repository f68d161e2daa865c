//! Play command - a single interactive or scripted game
//!
//! The turn loop lives here: it owns the board, alternates sides,
//! passes a turn when a side has no legal move, and ends the game once
//! both sides pass back to back.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use reversi_core::{AlphaBetaPlayer, Board, Cell, Color, Move, Outcome, Player, Position, BOARD_SIZE};

#[derive(Args)]
pub struct PlayArgs {
    /// Black seat: "human" or "ai"
    #[arg(long, default_value = "human")]
    pub black: String,

    /// White seat: "human" or "ai"
    #[arg(long, default_value = "ai")]
    pub white: String,

    /// AI search depth (work grows exponentially; keep small)
    #[arg(long, default_value = "4")]
    pub depth: u32,

    /// Start from a saved position JSON instead of the standard opening
    #[arg(long, value_name = "FILE")]
    pub position: Option<PathBuf>,
}

/// Run the play command: set up seats, loop turns, report the outcome
pub fn run(args: PlayArgs) -> Result<()> {
    let position = load_position(&args)?;
    let mut black = build_player(&args.black, args.depth)?;
    let mut white = build_player(&args.white, args.depth)?;

    tracing::info!(
        "Starting game: black={}, white={}, depth={}",
        args.black,
        args.white,
        args.depth
    );

    let board = play_game(position, black.as_mut(), white.as_mut());
    report_outcome(&board);
    Ok(())
}

fn load_position(args: &PlayArgs) -> Result<Position> {
    match &args.position {
        Some(path) => Position::load(path)
            .with_context(|| format!("Failed to load position: {}", path.display())),
        None => Ok(Position::initial()),
    }
}

fn build_player(seat: &str, depth: u32) -> Result<Box<dyn Player>> {
    match seat {
        "human" => Ok(Box::new(HumanPlayer)),
        "ai" => Ok(Box::new(AlphaBetaPlayer::new(depth))),
        other => bail!("unknown seat '{other}' (expected 'human' or 'ai')"),
    }
}

/// Alternate turns until both sides pass consecutively
fn play_game<'a>(position: Position, black: &'a mut dyn Player, white: &'a mut dyn Player) -> Board {
    let mut board = position.board;
    let mut to_move = position.to_move;
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 {
        println!("{}", render(&board));
        print_score(&board);

        if board.legal_moves(to_move).is_empty() {
            println!("{to_move} has no legal moves and passes.");
            consecutive_passes += 1;
            to_move = to_move.opponent();
            continue;
        }
        consecutive_passes = 0;

        let player = match to_move {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };

        println!("{to_move} to play");
        board = take_turn(&board, player, to_move);
        to_move = to_move.opponent();
    }

    board
}

/// Ask the active player for moves until one applies cleanly. The core
/// re-validates regardless of where the move came from.
fn take_turn(board: &Board, player: &mut dyn Player, color: Color) -> Board {
    loop {
        // legal_moves was non-empty, so a well-behaved player never passes here
        let Some(mv) = player.produce_move(board, color) else {
            tracing::warn!("{color} offered no move despite having one; passing anyway");
            return board.clone();
        };

        match board.apply(mv, color) {
            Ok(next) => {
                tracing::info!("{color} placed a disc at {mv}");
                return next;
            }
            Err(err) => {
                // Only reachable for human input; AI moves come from legal_moves
                println!("{err}. Try again.");
            }
        }
    }
}

fn report_outcome(board: &Board) {
    println!("{}", render(board));
    println!("No more legal moves.");
    print_score(board);

    match board.outcome() {
        Outcome::Winner(color) => println!("The winner is {color}!"),
        Outcome::Draw => println!("It's a draw!"),
        Outcome::Undecided => unreachable!("game loop ended with moves remaining"),
    }
}

// ============================================================================
// HUMAN PLAYER
// ============================================================================

/// Reads `row,col` pairs from stdin, re-prompting on malformed input.
/// Legality is checked before handing the move back so the prompt loop
/// stays here rather than bouncing through the turn loop.
pub struct HumanPlayer;

impl Player for HumanPlayer {
    fn produce_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        if board.legal_moves(color).is_empty() {
            return None;
        }

        let stdin = io::stdin();
        loop {
            print!("Enter row,col (e.g. 2,3): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                continue;
            }

            match parse_move(&line) {
                Some(mv) if !board.captures(mv, color).is_empty() => return Some(mv),
                Some(mv) => println!("{mv} is not a legal move."),
                None => println!("Please enter two numbers separated by a comma."),
            }
        }
    }
}

fn parse_move(line: &str) -> Option<Move> {
    let (row, col) = line.trim().split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some(Move::new(row, col))
}

// ============================================================================
// RENDERING
// ============================================================================

/// Plain-text board: `B`/`W` discs, `.` for empty, row/col headers
pub fn render(board: &Board) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&row.to_string());
        for col in 0..BOARD_SIZE {
            out.push(' ');
            out.push(match board.get(row, col) {
                Some(Cell::Black) => 'B',
                Some(Cell::White) => 'W',
                _ => '.',
            });
        }
        out.push('\n');
    }
    out
}

fn print_score(board: &Board) {
    let (black, white) = board.score();
    println!("Black: {black}  White: {white}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("2,3"), Some(Move::new(2, 3)));
        assert_eq!(parse_move(" 4 , 5 \n"), Some(Move::new(4, 5)));
        assert_eq!(parse_move("4 5"), None);
        assert_eq!(parse_move("a,b"), None);
        assert_eq!(parse_move(""), None);
    }

    #[test]
    fn test_render_initial_board() {
        let text = render(&Board::new());
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4], "3 . . . W B . . .");
        assert_eq!(rows[5], "4 . . . B W . . .");
    }

    #[test]
    fn test_build_player_rejects_unknown_seat() {
        assert!(build_player("human", 4).is_ok());
        assert!(build_player("ai", 4).is_ok());
        assert!(build_player("robot", 4).is_err());
    }

    #[test]
    fn test_ai_game_terminates() {
        let mut black = AlphaBetaPlayer::new(1);
        let mut white = AlphaBetaPlayer::new(1);
        let board = play_game(Position::initial(), &mut black, &mut white);
        assert!(board.legal_moves(Color::Black).is_empty());
        assert!(board.legal_moves(Color::White).is_empty());
        assert_ne!(board.outcome(), Outcome::Undecided);
    }
}
