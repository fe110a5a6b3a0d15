//! Per-deck cache for bookmarks and configuration overrides.
//!
//! Files are stored under `.cache/` using a hash of the deck path as the
//! directory name to avoid filesystem issues. Bookmarks live in a single
//! `bookmarks.json` holding the JSON array of bookmarked question ids,
//! rewritten in full on every toggle.

use crate::config::AppConfig;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".cache";

/// Load the persisted bookmark ids for a deck, if present.
pub fn load_bookmarks(deck_path: &Path) -> Option<Vec<u64>> {
    let data = fs::read_to_string(bookmarks_path(deck_path)).ok()?;
    serde_json::from_str(&data).ok()
}

/// Rewrite the full bookmark set. Unlike the config writers this reports
/// failure so the caller can flag the set as unsynced.
pub fn save_bookmarks(deck_path: &Path, ids: &[u64]) -> anyhow::Result<()> {
    let path = bookmarks_path(deck_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string(ids)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn hash_dir(deck_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(deck_path.as_os_str().to_string_lossy().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    Path::new(CACHE_DIR).join(hash)
}

fn bookmarks_path(deck_path: &Path) -> PathBuf {
    hash_dir(deck_path).join("bookmarks.json")
}

pub fn tts_dir(deck_path: &Path) -> PathBuf {
    hash_dir(deck_path).join("tts")
}

pub fn load_deck_config(deck_path: &Path) -> Option<AppConfig> {
    let path = hash_dir(deck_path).join("config.toml");
    let data = fs::read_to_string(path).ok()?;
    toml::from_str(&data).ok()
}

/// Persist per-deck config overrides. Errors are ignored to keep the UI
/// responsive.
pub fn save_deck_config(deck_path: &Path, config: &AppConfig) {
    let dir = hash_dir(deck_path);
    let path = dir.join("config.toml");
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(contents) = toml::to_string(config) {
        let _ = fs::write(path, contents);
    }
}
