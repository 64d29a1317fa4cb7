use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Set once at startup by main() from the --data-dir argument.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Call this from main() before any load/save operations.
pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = DATA_DIR.get() {
        return Ok(dir.clone());
    }
    // Fallback when running tests or if set_data_dir was not called
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join("config"))
}

/// Whether a file should be read and written as JSON (by extension);
/// anything else is YAML.
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Reads `path` as JSON or YAML depending on its extension.
pub fn read_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    decode(&contents, is_json_path(path), path)
}

/// Writes `value` to `path` as JSON or YAML depending on its extension,
/// creating parent directories as needed.
pub fn write_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }
    let contents = encode(value, is_json_path(path))?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn decode<T: for<'de> Deserialize<'de>>(contents: &str, json: bool, path: &Path) -> Result<T> {
    if json {
        serde_json::from_str(contents)
            .with_context(|| format!("failed to parse JSON from {}", path.display()))
    } else {
        serde_norway::from_str(contents)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }
}

fn encode<T: Serialize>(value: &T, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).context("failed to serialize JSON")
    } else {
        serde_norway::to_string(value).context("failed to serialize YAML")
    }
}

pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;

    /// Load from the global data directory; a missing file yields `Default`.
    fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    /// Load from an explicit directory, bypassing the global `DATA_DIR`.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            tracing::debug!(path = %path.display(), "file missing, using defaults");
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading");
        read_file(&path)
    }

    /// Save to an explicit directory, bypassing the global `DATA_DIR`.
    fn save_to(&self, dir: &Path) -> Result<()> {
        write_file(self, &dir.join(Self::filename()))
    }
}
