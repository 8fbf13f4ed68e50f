//! Storage utilities for Slow Computer apps
//!
//! JSON preference files under the per-app config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Read and deserialize a JSON file.
///
/// A missing file is reported as [`StorageError::NotFound`] so callers can
/// tell "first run" apart from a broken file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize `value` as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Get the config directory for Slow Computer apps
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        width: f32,
        name: String,
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = Prefs { width: 260.0, name: "calculator".into() };

        save_json(&prefs, &path).unwrap();
        let loaded: Prefs = load_json(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_json::<Prefs>(&path).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Prefs>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_config_dir_ends_with_app() {
        let dir = config_dir("slowcalc");
        let name = dir.to_string_lossy().to_lowercase();
        assert!(name.contains("slowcalc") || dir == PathBuf::from("."));
    }
}
