//! Share text for today's finished game

use super::Game;
use crate::output::share_text;
use crate::storage::Storage;
use anyhow::{Result, bail};

/// # Errors
/// Today's game has not been finished yet.
pub fn share_today(game: &Game, storage: &dyn Storage) -> Result<String> {
    let session = game.open_session(storage, game.daily_puzzle().into());
    match share_text(&session, &game.config.share_footer) {
        Some(text) => Ok(text),
        None => bail!("today's game is not finished yet"),
    }
}
