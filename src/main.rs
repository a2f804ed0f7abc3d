//! SUTOM perso - CLI
//!
//! Daily word game with TUI and line modes.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use sutom_daily::{
    commands::{Game, run_simple, share_today, today_info},
    config::GameConfig,
    daily::local_today,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing, log_file},
    output::print_today,
    storage::FileStorage,
};

#[derive(Parser)]
#[command(
    name = "sutom",
    about = "SUTOM perso: find the word of the day in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./sutom.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved games and the TUI log
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Play the puzzle of another day (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Random word, not saved
        #[arg(short, long)]
        practice: bool,
    },

    /// Simple line mode (one guess per line, no TUI)
    Simple {
        /// Random word, not saved
        #[arg(short, long)]
        practice: bool,
    },

    /// Show today's puzzle number, word length and progress
    Today,

    /// Print the share text of today's finished game
    Share,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { practice: false });

    let target = match &command {
        Commands::Play { .. } => LogTarget::File(log_file(&config.data_dir)),
        _ => LogTarget::Stderr,
    };
    init_tracing(&target)?;

    let game = Game::new(config, cli.date.unwrap_or_else(local_today))?;
    let storage = FileStorage::new(&game.config.data_dir);

    match command {
        Commands::Play { practice } => {
            let follow_date = !practice && cli.date.is_none();
            run_play_command(&game, storage, practice, follow_date)
        }
        Commands::Simple { practice } => run_simple_command(&game, storage, practice),
        Commands::Today => {
            print_today(&mut io::stdout(), &today_info(&game, &storage))?;
            Ok(())
        }
        Commands::Share => {
            println!("{}", share_today(&game, &storage)?);
            Ok(())
        }
    }
}

fn run_simple_command(game: &Game, mut storage: FileStorage, practice: bool) -> Result<()> {
    let session = game.open_session(&storage, game.puzzle(practice));
    run_simple(
        io::stdin().lock(),
        &mut io::stdout(),
        session,
        &mut storage,
        &game.config.share_footer,
    )?;
    Ok(())
}

fn run_play_command(
    game: &Game,
    storage: FileStorage,
    practice: bool,
    follow_date: bool,
) -> Result<()> {
    let session = game.open_session(&storage, game.puzzle(practice));
    let mut app = App::new(
        session,
        game.config.reveal_stagger(),
        Box::new(storage),
        game.config.share_footer.clone(),
    );
    if follow_date {
        app = app.following_the_date(game.clone());
    }
    run_tui(app)
}
