//! TUI application state and logic

use crate::commands::Game;
use crate::daily::local_today;
use crate::game::{Board, GameSession};
use crate::storage::{Storage, persist_session};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long to wait for input when no reveal step is pending
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Application state
pub struct App {
    pub board: Board,
    pub share_footer: String,
    /// Why the last guess was rejected, cleared by the next keystroke
    pub error: Option<String>,
    pub should_quit: bool,
    storage: Box<dyn Storage>,
    /// Set when the board follows the calendar to the next daily puzzle
    daily: Option<Game>,
}

impl App {
    #[must_use]
    pub fn new(
        session: GameSession,
        stagger: Duration,
        storage: Box<dyn Storage>,
        share_footer: String,
    ) -> Self {
        Self {
            board: Board::new(session, stagger),
            share_footer,
            error: None,
            should_quit: false,
            storage,
            daily: None,
        }
    }

    /// Switch to the new daily puzzle when the local date changes
    #[must_use]
    pub fn following_the_date(mut self, game: Game) -> Self {
        self.daily = Some(game);
        self
    }

    /// Open the puzzle of `today` if the board still shows an older day
    ///
    /// Returns true when the session was replaced.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let Some(game) = self.daily.as_mut() else {
            return false;
        };
        if game.date == today {
            return false;
        }

        game.date = today;
        let session = game.open_session(self.storage.as_ref(), game.daily_puzzle().into());
        info!(%today, title = %session.puzzle().title(), "new day, switching puzzle");
        self.board.replace(session);
        self.error = None;
        true
    }

    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(now),
            KeyCode::Backspace => {
                self.error = None;
                self.edit(Board::backspace);
            }
            KeyCode::Char(ch) => {
                self.error = None;
                self.edit(|board| board.push_letter(ch));
            }
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut Board)) {
        let before = self.board.session().input().to_owned();
        change(&mut self.board);
        if self.board.session().input() != before {
            self.save();
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.board.submit(now) {
            Ok(Some(outcome)) => {
                debug!(?outcome, "guess accepted");
                self.error = None;
                self.save();
            }
            Ok(None) => {}
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    fn save(&mut self) {
        persist_session(self.storage.as_mut(), self.board.session());
    }

    /// Advance the reveal animation and follow the date; true when a redraw
    /// is needed
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let rolled = self.roll_over(local_today());
        self.board.tick(now) || rolled
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.board
            .next_due()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
