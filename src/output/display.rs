//! Display functions for the line-mode game and command results

use super::formatters::{AZERTY_ROWS, colored_letter};
use crate::commands::{Progress, TodayInfo};
use crate::core::{CellState, KeyStates};
use crate::game::{Board, MAX_ATTEMPTS};
use colored::Colorize;
use std::io::{self, Write};

/// Print the grid as the player currently sees it
///
/// # Errors
/// Writing to `out` failed.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let width = board.session().width();

    writeln!(out)?;
    for row in 0..MAX_ATTEMPTS {
        write!(out, "  ")?;
        for column in 0..width {
            let cell = board.cell(row, column);
            let tile = match (cell.letter, cell.placeholder) {
                (Some(letter), false) => colored_letter(letter, cell.state),
                (Some(letter), true) => format!(" {letter} ").bright_black(),
                (None, _) => " · ".bright_black(),
            };
            write!(out, "{tile}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print the AZERTY keyboard colored by key states
///
/// # Errors
/// Writing to `out` failed.
pub fn print_keyboard<W: Write>(out: &mut W, keys: &KeyStates) -> io::Result<()> {
    for (indent, row) in AZERTY_ROWS.iter().enumerate() {
        write!(out, "{}", " ".repeat(indent * 2 + 1))?;
        for key in row.chars() {
            let state = keys.get(key);
            let tile = if state == CellState::Empty {
                format!(" {key} ").normal()
            } else {
                colored_letter(key, state)
            };
            write!(out, "{tile}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print what is known about today's puzzle
///
/// # Errors
/// Writing to `out` failed.
pub fn print_today<W: Write>(out: &mut W, info: &TodayInfo) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        " {} ",
        format!("SUTOM perso #{}", info.number).bright_cyan().bold()
    )?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    writeln!(out, "   Date:          {}", info.date)?;
    writeln!(out, "   Day index:     {}", info.day_index)?;
    writeln!(out, "   Word length:   {}", info.length)?;
    if let Some(first) = info.first_letter {
        writeln!(out, "   First letter:  {}", first.to_string().bright_yellow().bold())?;
    }

    let progress = match info.progress {
        Progress::NotStarted => "not started".normal(),
        Progress::InProgress { attempts_used } => {
            format!("{attempts_used}/{MAX_ATTEMPTS} attempts used").yellow()
        }
        Progress::Won { attempts_used } => {
            format!("won in {attempts_used}/{MAX_ATTEMPTS}").green().bold()
        }
        Progress::Lost => "lost".red().bold(),
    };
    writeln!(out, "   Progress:      {progress}")
}
