use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PrefsError;
use crate::theme::ThemeMode;

const APP_DIR_NAME: &str = "grid-snake";
const PREFS_FILE_NAME: &str = "preferences.json";

/// Values kept between runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "snake-best-score", default)]
    pub best_score: u32,
    #[serde(rename = "snake-theme", default)]
    pub theme: ThemeMode,
}

impl Preferences {
    /// Raises the best score to `score`. Returns true if it was beaten.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score <= self.best_score {
            return false;
        }
        self.best_score = score;
        true
    }
}

/// Returns the platform-correct preferences path.
#[must_use]
pub fn prefs_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(PREFS_FILE_NAME);
    base
}

/// Loads preferences from `path`.
///
/// A missing file yields defaults (first run). A file that exists but cannot
/// be read or parsed is an error, so the caller can warn and fall back.
pub fn load_from(path: &Path) -> Result<Preferences, PrefsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no preferences file yet");
            return Ok(Preferences::default());
        }
        Err(source) => {
            return Err(PrefsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| PrefsError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves preferences to `path`, creating parent directories when needed.
pub fn save_to(path: &Path, prefs: &Preferences) -> Result<(), PrefsError> {
    let io_error = |source: io::Error| PrefsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(prefs).map_err(|source| PrefsError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::PrefsError;
    use crate::theme::ThemeMode;

    use super::{Preferences, load_from, save_to};

    #[test]
    fn preferences_round_trip() {
        let path = unique_test_path("round_trip");
        let prefs = Preferences {
            best_score: 42,
            theme: ThemeMode::Light,
        };

        save_to(&path, &prefs).expect("save should succeed");
        let loaded = load_from(&path).expect("load should succeed");

        assert_eq!(loaded, prefs);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let path = unique_test_path("missing");

        let loaded = load_from(&path).expect("missing file should return defaults");

        assert_eq!(loaded, Preferences::default());
        assert_eq!(loaded.theme, ThemeMode::Dark);
    }

    #[test]
    fn malformed_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            load_from(&path),
            Err(PrefsError::Malformed { .. })
        ));

        cleanup_test_path(&path);
    }

    #[test]
    fn stored_keys_are_fixed_names() {
        let json = serde_json::to_value(Preferences {
            best_score: 7,
            theme: ThemeMode::Dark,
        })
        .expect("serializable");

        assert_eq!(json["snake-best-score"], 7);
        assert_eq!(json["snake-theme"], "dark");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"snake-best-score": 12}"#).expect("valid json");

        assert_eq!(prefs.best_score, 12);
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }

    #[test]
    fn record_score_only_raises() {
        let mut prefs = Preferences::default();

        assert!(prefs.record_score(5));
        assert!(!prefs.record_score(5));
        assert!(!prefs.record_score(3));
        assert_eq!(prefs.best_score, 5);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-prefs-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
