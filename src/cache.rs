use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, Timelike};
use tracing::info;

use crate::config::Game;
use crate::vrml::models::Snapshot;

/// Find the cached snapshot file for `game`, if any.
///
/// A missing cache directory is not an error. Entries are sorted by file
/// name so the pick is deterministic when several snapshots share the game
/// prefix; the first prefix match wins.
pub fn find_cached(dir: &Path, game: Game) -> Result<Option<PathBuf>> {
    if !dir.exists() {
        return Ok(None);
    }

    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list cache directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    Ok(names
        .into_iter()
        .find(|name| name.starts_with(game.as_str()))
        .map(|name| dir.join(name)))
}

/// Load a previously written snapshot from disk. Read and parse failures
/// are fatal for the run; there is no fallback to refetching here.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cached snapshot {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse cached snapshot {}", path.display()))
}

/// Persist a snapshot as pretty-printed JSON, creating the cache directory
/// if needed. Returns the path written. Earlier snapshots for the same game
/// are left in place; this never overwrites unless the wall-clock timestamp
/// collides.
pub fn write_snapshot(dir: &Path, game: Game, snapshot: &Snapshot) -> Result<PathBuf> {
    if !dir.exists() {
        info!("Creating missing directory: {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    }

    let path = dir.join(snapshot_file_name(game, Local::now()));
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(path)
}

/// `<game>-<day>-<month>-<year>_<hour>-<minute>-<second>.json`, local
/// wall-clock at write time. Components are unpadded, matching file names
/// produced by earlier versions of the tool.
fn snapshot_file_name(game: Game, now: DateTime<Local>) -> String {
    format!(
        "{}-{}-{}-{}_{}-{}-{}.json",
        game,
        now.day(),
        now.month(),
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
