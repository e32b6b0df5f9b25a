use crate::coords;
use crate::render::render;
use rand::Rng;
use sapper_core::{Board, CellCount, Coord, RevealOutcome, max_mines};
use std::io::{self, BufRead, Write};

/// Single-letter row labels cap the board at 26 rows.
const MAX_SIZE: Coord = 26;

/// How one game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GameEnd {
    Won,
    Lost,
}

/// Runs game sessions until the player declines a replay or input runs dry.
///
/// Reader, writer, and random source are all injected so scripted
/// transcripts stay deterministic.
pub fn run<R, W, G>(input: &mut R, output: &mut W, rng: &mut G) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "Welcome to Minesweeper!")?;
    loop {
        let Some(mut board) = setup_board(input, output, rng)? else {
            return Ok(());
        };
        let Some(end) = play(&mut board, input, output)? else {
            return Ok(());
        };
        log::debug!("game finished: {end:?}");

        writeln!(output, "Play again? (y/n):")?;
        let Some(answer) = read_line(input)? else {
            return Ok(());
        };
        if !answer.eq_ignore_ascii_case("y") {
            writeln!(output, "Thanks for playing!")?;
            return Ok(());
        }
    }
}

// Prompts for size and mine count, then builds a freshly mined board.
// Engine-side rejections re-enter the prompt loop rather than aborting.
fn setup_board<R, W, G>(input: &mut R, output: &mut W, rng: &mut G) -> io::Result<Option<Board>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        let Some(size) = prompt_int(
            input,
            output,
            "Enter the size of the grid (e.g. 4 for a 4x4 grid):",
            2,
            MAX_SIZE as CellCount,
        )?
        else {
            return Ok(None);
        };
        let size = size as Coord;

        let Some(mines) = prompt_int(
            input,
            output,
            "Enter the number of mines to place on the grid (maximum is 35% of the total squares):",
            1,
            max_mines(size),
        )?
        else {
            return Ok(None);
        };

        let board = Board::new(size).and_then(|mut board| {
            board.place_mines(mines, rng)?;
            Ok(board)
        });
        match board {
            Ok(board) => {
                writeln!(output)?;
                writeln!(output, "Here is your minefield:")?;
                return Ok(Some(board));
            }
            Err(err) => writeln!(output, "Invalid input: {err}")?,
        }
    }
}

// One game on an already-mined board, from first render to win or loss.
// Returns None when input ends mid-game.
fn play<R, W>(board: &mut Board, input: &mut R, output: &mut W) -> io::Result<Option<GameEnd>>
where
    R: BufRead,
    W: Write,
{
    render(board, output)?;
    loop {
        writeln!(output, "Select a square to reveal (e.g. A1):")?;
        let Some(token) = read_line(input)? else {
            return Ok(None);
        };

        let outcome = coords::parse(&token, board.size())
            .map_err(|err| err.to_string())
            .and_then(|pos| board.reveal(pos).map_err(|err| err.to_string()));
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(message) => {
                writeln!(output, "Invalid input: {message}")?;
                continue;
            }
        };

        match outcome {
            RevealOutcome::AlreadyRevealed(_) => {
                writeln!(
                    output,
                    "This square was already revealed ({}).",
                    outcome.adjacent()
                )?;
            }
            RevealOutcome::HitMine => {
                writeln!(output, "Oh no, you detonated a mine! Game over.")?;
                board.reveal_mines();
                render(board, output)?;
                return Ok(Some(GameEnd::Lost));
            }
            RevealOutcome::Revealed(count) => {
                writeln!(output, "This square contains {count} adjacent mines.")?;
                writeln!(output)?;
                writeln!(output, "Here is your updated minefield:")?;
                render(board, output)?;
                if board.all_non_mines_revealed() {
                    writeln!(output, "Congratulations, you have won the game!")?;
                    return Ok(Some(GameEnd::Won));
                }
            }
        }
    }
}

// Re-prompts until a whole number in [min, max] arrives; None on end of
// input.
fn prompt_int<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: CellCount,
    max: CellCount,
) -> io::Result<Option<CellCount>>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{prompt}")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<CellCount>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            Ok(_) => writeln!(output, "Please enter a number between {min} and {max}.")?,
            Err(_) => writeln!(output, "Please enter a valid integer.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
