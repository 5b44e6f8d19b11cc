//! Line-oriented text front end.
//!
//! One command per line, one or more response lines per command:
//!
//! ```text
//! > e2e4
//! ok e4 ongoing
//! > moves g8
//! moves h6 f6
//! > undo
//! undone
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{GameSession, Piece};

pub mod command;

pub use command::{parse_command, Command, CommandError};

/// Read commands from `input` until `quit` or end of input, writing
/// responses to `output`. Bad input is reported and the loop continues.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut game = GameSession::new();

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => execute(&mut game, cmd, &mut output)?,
            Err(e) => {
                debug_log!("bad console input: {e}");
                writeln!(output, "error: {e}")?;
            }
        }
        output.flush()?;
    }

    output.flush()
}

/// Run one command against `game`.
pub fn execute<W: Write>(game: &mut GameSession, cmd: Command, out: &mut W) -> io::Result<()> {
    match cmd {
        Command::New(placement) => {
            let result = match placement {
                Some(text) => game.new_game(&text).map_err(CommandError::from),
                None => {
                    *game = GameSession::new();
                    Ok(())
                }
            };
            match result {
                Ok(()) => writeln!(out, "ok {}", game.position().to_placement())?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Command::Move { from, to } => match game.request_move(from, to) {
            Ok(record) => writeln!(out, "ok {} {}", record.notation, record.status)?,
            Err(e) => writeln!(out, "illegal {e}")?,
        },
        Command::Moves(square) => {
            let destinations = game.select(square).destinations();
            writeln!(out, "{}", word_list("moves", destinations.iter()))?;
        }
        Command::Undo => {
            if game.undo() {
                writeln!(out, "undone")?;
            } else {
                writeln!(out, "nothing to undo")?;
            }
        }
        Command::Board => {
            writeln!(out, "{}", game.position().to_placement())?;
            writeln!(out, "{}", game.board())?;
        }
        Command::Status => {
            writeln!(out, "{} to move: {}", game.side_to_move(), game.status())?;
        }
        Command::History => {
            writeln!(out, "{}", word_list("history", game.notation().iter()))?;
        }
        Command::Captures => {
            let captures = game.captures();
            writeln!(out, "{}", word_list("white", bin_chars(&captures.by_white)))?;
            writeln!(out, "{}", word_list("black", bin_chars(&captures.by_black)))?;
        }
        Command::Quit => {}
    }
    Ok(())
}

/// `label` followed by each item, space separated.
fn word_list<T: fmt::Display>(label: &str, items: impl Iterator<Item = T>) -> String {
    let mut line = label.to_string();
    for item in items {
        line.push(' ');
        line.push_str(&item.to_string());
    }
    line
}

fn bin_chars(pieces: &[Piece]) -> impl Iterator<Item = char> + '_ {
    pieces.iter().map(|p| p.to_placement_char())
}
