//! Tracing setup
//!
//! `RUST_LOG` overrides [`DEFAULT_FILTER`]. The full-screen game must not
//! write to the terminal it draws on, so it logs to a file instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_FILTER: &str = "sutom_daily=info";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<data_dir>/sutom.log`
#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join("sutom.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// # Errors
/// The log file cannot be opened, or a subscriber is already installed.
pub fn init_tracing(target: &LogTarget) -> Result<()> {
    let (stderr, file) = match target {
        LogTarget::Stderr => (Some(fmt::layer().with_writer(io::stderr)), None),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            (
                None,
                Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
            )
        }
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr)
        .with(file)
        .try_init()
        .context("installing tracing subscriber")?;

    trace!("finished");
    Ok(())
}
