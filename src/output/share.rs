//! Spoiler-free result summary
//!
//! ```text
//! SUTOM perso #12 · 6 letters
//! 3/6
//! 🟥🟦🟦🟡🟦🟦
//! 🟥🟥🟡🟦🟦🟥
//! 🟥🟥🟥🟥🟥🟥
//!
//! <footer>
//! ```

use super::formatters::row_to_glyphs;
use crate::game::{GameSession, MAX_ATTEMPTS};
use std::fmt::Write;

/// Share text of a finished game, `None` while it is still running
#[must_use]
pub fn share_text(session: &GameSession, footer: &str) -> Option<String> {
    if !session.is_over() {
        return None;
    }

    let mut text = format!(
        "{} · {} letters\n{}/{MAX_ATTEMPTS}\n",
        session.puzzle().title(),
        session.width(),
        session.attempts_used(),
    );

    for row in session.grid().played_rows() {
        let _ = writeln!(text, "{}", row_to_glyphs(row));
    }

    text.push('\n');
    text.push_str(footer);
    Some(text)
}
