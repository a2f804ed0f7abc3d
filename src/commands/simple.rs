//! Simple line-mode game
//!
//! Text-based game without the TUI: one guess per line.

use crate::game::{Board, GameSession, MAX_ATTEMPTS};
use crate::output::{print_board, print_keyboard, share_text};
use crate::storage::{Storage, persist_session};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Play `session` reading guesses from `input`
///
/// Every accepted guess is saved. Returns the session as it stands when the
/// game ends, the player quits or the input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    session: GameSession,
    storage: &mut dyn Storage,
    share_footer: &str,
) -> Result<GameSession> {
    let mut board = Board::new(session, Duration::ZERO);
    let title = board.session().puzzle().title();

    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", title.bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        "Find the {}-letter word in {MAX_ATTEMPTS} attempts. Type 'quit' to leave.",
        board.session().width()
    )?;
    if board.session().rules().lock_first_letter {
        writeln!(
            out,
            "It starts with {}.",
            board.session().secret().first_letter().to_string().bright_yellow().bold()
        )?;
    }

    loop {
        print_board(out, &board)?;
        print_keyboard(out, board.visible_keys())?;

        if board.session().is_over() {
            print_result(out, board.session(), share_footer)?;
            break;
        }

        write!(
            out,
            "\nGuess {}/{MAX_ATTEMPTS}: ",
            board.session().current_attempt() + 1
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let guess = line.trim();
        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 See you tomorrow!\n")?;
                break;
            }
            _ => {}
        }

        let now = Instant::now();
        match board.submit_word(guess, now) {
            Ok(_) => {
                board.tick(now);
                persist_session(storage, board.session());
            }
            Err(error) => writeln!(out, "{}", format!("❌ {error}").red())?,
        }
    }

    Ok(board.session().clone())
}

fn print_result<W: Write>(out: &mut W, session: &GameSession, footer: &str) -> Result<()> {
    let message = session.status_message();
    if session.has_won() {
        writeln!(out, "\n{}", message.green().bold())?;
    } else {
        writeln!(out, "\n{}", message.red().bold())?;
    }

    if let Some(text) = share_text(session, footer) {
        writeln!(out, "\n{text}\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DailyPuzzle, Puzzle, Rules};
    use crate::storage::{MemoryStorage, day_key};
    use std::io::Cursor;

    fn session() -> GameSession {
        let puzzle = Puzzle::Daily(DailyPuzzle {
            day_index: 0,
            secret: Word::new("LIMACE").unwrap(),
        });
        GameSession::new(puzzle, Rules::default())
    }

    fn play(lines: &str, storage: &mut MemoryStorage) -> (GameSession, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let session =
            run_simple(Cursor::new(lines.to_owned()), &mut out, session(), storage, "footer")
                .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_share_text_and_saves() {
        let mut storage = MemoryStorage::new();
        let (session, output) = play("limite\nLIMACE\n", &mut storage);

        assert!(session.has_won());
        assert!(output.contains("It starts with L."));
        assert!(output.contains("Bravo!"));
        assert!(output.contains("SUTOM perso #1 · 6 letters\n2/6\n"));
        assert!(storage.get(&day_key(0)).is_some());
    }

    #[test]
    fn rejected_guesses_are_reported() {
        let mut storage = MemoryStorage::new();
        let (session, output) = play("lima\npiment\n", &mut storage);

        assert_eq!(session.current_attempt(), 0);
        assert!(output.contains("The word must have 6 letters (got 4)"));
        assert!(output.contains("The word must start with L"));
        assert!(storage.is_empty());
    }

    #[test]
    fn quit_and_end_of_input_stop_the_game() {
        let mut storage = MemoryStorage::new();
        let (session, output) = play("limite\nquit\nlimace\n", &mut storage);
        assert_eq!(session.current_attempt(), 1);
        assert!(output.contains("See you tomorrow"));

        let (session, _) = play("limite\n", &mut MemoryStorage::new());
        assert_eq!(session.current_attempt(), 1);
        assert!(!session.is_over());
    }
}
