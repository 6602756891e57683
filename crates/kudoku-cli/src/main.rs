//! Terminal frontend for the kudoku engine.
//!
//! This binary is presentation glue only: it renders the grid, collects
//! cell edits, and maps solve outcomes to messages. All rule knowledge
//! lives behind the [`kudoku_game`] boundary.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin kudoku -- --difficulty 2
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --bin kudoku -- --difficulty 2 --seed 12345
//! ```
//!
//! Commands at the prompt: `set ROW COL DIGIT`, `clear ROW COL`, `show`,
//! `solve`, `quit` (rows, columns, and digits are all 1-9).

use std::io::{self, BufRead as _, Write as _};

use clap::Parser;
use kudoku_core::{Digit, Position};
use kudoku_game::{CellState, Game, GameError, SolveOutcome};
use kudoku_generator::{PuzzleGenerator, reference_solution};
use log::{debug, info};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level; difficulty x 10 cells are blanked. 0 keeps the
    /// grid fully solved.
    #[arg(short, long, value_name = "LEVEL", default_value_t = 0)]
    difficulty: u32,

    /// Seed for a reproducible puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let solution = reference_solution();
    let puzzle = match args.seed {
        Some(seed) => PuzzleGenerator::generate_with_seed(&solution, args.difficulty, seed),
        None => PuzzleGenerator::new().generate(&solution, args.difficulty),
    };
    info!(
        "generated puzzle: difficulty={}, seed={}, blanks={}",
        args.difficulty,
        puzzle.seed,
        puzzle.problem.empty_count()
    );

    let mut game = Game::new(puzzle);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    render(&mut out, &game)?;
    writeln!(
        out,
        "Commands: set ROW COL DIGIT | clear ROW COL | show | solve | quit"
    )?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match run_command(&mut out, &mut game, &line)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn run_command(out: &mut impl io::Write, game: &mut Game, line: &str) -> io::Result<Flow> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => {}
        Some("set") => match parse_set(words.next(), words.next(), words.next()) {
            Some((pos, digit)) => {
                report(out, game.set_digit(pos, digit))?;
                render(out, game)?;
            }
            None => writeln!(out, "Usage: set ROW COL DIGIT (all 1-9)")?,
        },
        Some("clear") => match parse_cell(words.next(), words.next()) {
            Some(pos) => {
                report(out, game.clear_cell(pos))?;
                render(out, game)?;
            }
            None => writeln!(out, "Usage: clear ROW COL (both 1-9)")?,
        },
        Some("show") => render(out, game)?,
        Some("solve") => {
            debug!("solve requested");
            match game.request_solve() {
                SolveOutcome::Solved(_) => {
                    render(out, game)?;
                    writeln!(out, "Puzzle solved!")?;
                }
                SolveOutcome::Unsolvable => {
                    writeln!(out, "This puzzle can't be solved.")?;
                }
                SolveOutcome::InvalidInput => {
                    writeln!(
                        out,
                        "Invalid input detected. Please correct the grid and try again."
                    )?;
                }
            }
        }
        Some("quit" | "exit") => return Ok(Flow::Quit),
        Some(other) => writeln!(out, "Unknown command: {other}")?,
    }
    Ok(Flow::Continue)
}

fn report(out: &mut impl io::Write, result: Result<(), GameError>) -> io::Result<()> {
    if let Err(err) = result {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

/// Parses a 1-based row/column token into a 0-based index.
fn parse_index(token: Option<&str>) -> Option<u8> {
    let value: u8 = token?.parse().ok()?;
    (1..=9).contains(&value).then(|| value - 1)
}

fn parse_cell(row: Option<&str>, col: Option<&str>) -> Option<Position> {
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    Some(Position::new(col, row))
}

fn parse_set(
    row: Option<&str>,
    col: Option<&str>,
    digit: Option<&str>,
) -> Option<(Position, Digit)> {
    let pos = parse_cell(row, col)?;
    let digit = Digit::new(digit?.parse().ok()?)?;
    Some((pos, digit))
}

/// Renders the grid with 3x3 separators. Given cells print bare digits;
/// player digits are parenthesized; empty cells print a dot.
fn render(out: &mut impl io::Write, game: &Game) -> io::Result<()> {
    for y in 0..9 {
        if y > 0 && y % 3 == 0 {
            writeln!(out, "---------+---------+---------")?;
        }
        for x in 0..9 {
            if x > 0 && x % 3 == 0 {
                write!(out, "|")?;
            }
            match game.cell(Position::new(x, y)) {
                CellState::Given(digit) => write!(out, " {digit} ")?,
                CellState::Filled(digit) => write!(out, "({digit})")?,
                CellState::Empty => write!(out, " . ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
