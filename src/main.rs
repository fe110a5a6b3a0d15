//! Entry point for the flashcard viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load the question deck via `deck`.
//! - Load user configuration from `conf/config.toml` plus per-deck overrides.
//! - Load the persisted bookmark set.
//! - Launch the GUI application.

mod app;
mod cache;
mod config;
mod deck;
mod speech;

use crate::app::run_app;
use crate::cache::{load_bookmarks, load_deck_config};
use crate::config::load_config;
use crate::deck::load_deck;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_DECK_PATH: &str = "assets/questions.json";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Consume a pending Ctrl-C request, if one arrived since the last poll.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let base_config = load_config(Path::new("conf/config.toml"));
    let mut config = base_config.clone();
    if let Some(mut overrides) = load_deck_config(&args.deck_path) {
        info!("Loaded per-deck overrides from cache");
        // Always honor the base config's log level so user changes take effect.
        overrides.log_level = base_config.log_level;
        // Always honor base keybinding configuration.
        overrides.key_next_card = base_config.key_next_card.clone();
        overrides.key_prev_card = base_config.key_prev_card.clone();
        overrides.key_flip_card = base_config.key_flip_card.clone();
        overrides.key_toggle_bookmark = base_config.key_toggle_bookmark.clone();
        overrides.key_speak = base_config.key_speak.clone();
        overrides.key_toggle_menu = base_config.key_toggle_menu.clone();
        overrides.key_safe_quit = base_config.key_safe_quit.clone();
        config = overrides;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %args.deck_path.display(),
        level = %config.log_level,
        "Starting flashcard viewer"
    );
    info!(
        model = %config.tts_model_path,
        espeak = %config.tts_espeak_path,
        speed = config.tts_speed,
        "Active speech configuration"
    );

    if let Err(err) = ctrlc::set_handler(|| SIGINT_REQUESTED.store(true, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl-C handler: {err}");
    }

    let deck = load_deck(&args.deck_path)?;
    let stored_bookmarks = load_bookmarks(&args.deck_path).unwrap_or_default();
    info!(stored = stored_bookmarks.len(), "Loaded persisted bookmarks");
    if let Some(id) = args.start_question_id {
        info!(id, "Seeding start position from question id");
    }

    run_app(
        deck,
        config,
        args.deck_path,
        stored_bookmarks,
        args.start_question_id,
    )
    .context("Failed to start the GUI")?;
    Ok(())
}

struct CliArgs {
    deck_path: PathBuf,
    start_question_id: Option<u64>,
}

fn parse_args() -> Result<CliArgs> {
    let mut deck_path: Option<PathBuf> = None;
    let mut start_question_id = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--question" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--question requires an id"))?;
                start_question_id = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow!("Invalid question id: {value}"))?,
                );
            }
            _ if deck_path.is_none() => deck_path = Some(PathBuf::from(arg)),
            _ => {
                return Err(anyhow!(
                    "Usage: reibun-cards [deck.json] [--question <id>]"
                ));
            }
        }
    }

    let deck_path = deck_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_PATH));
    if !deck_path.exists() {
        return Err(anyhow!("Deck not found: {}", deck_path.display()));
    }
    Ok(CliArgs {
        deck_path,
        start_question_id,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
