use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpendError};

pub const DB_FILE: &str = "spendwise.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₪".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_path().join(DB_FILE)
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn config_dir() -> PathBuf {
    match std::env::var_os("SPENDWISE_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => home_dir().join(".config").join("spendwise"),
    }
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    home_dir().join("Documents").join("spendwise")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings, using defaults");
            return Settings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| SpendError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file() -> PathBuf {
    settings_path()
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            currency_symbol: "€".to_string(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: Settings = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_unreadable_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file.
        let s = load_settings_from(dir.path());
        assert_eq!(s.currency_symbol, "₪");
        assert!(s.data_dir.ends_with("spendwise"));

        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_settings_from(&path).currency_symbol, "₪");

        std::fs::write(&path, r#"{"data_dir": "/tmp/y", "currency_symbol": "$"}"#).unwrap();
        let s = load_settings_from(&path);
        assert_eq!(s.data_dir, "/tmp/y");
        assert_eq!(s.currency_symbol, "$");
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "₪");
        assert!(s.data_dir.ends_with("spendwise"));
        assert!(s.db_path().ends_with(DB_FILE));
    }

    #[test]
    fn test_missing_currency_falls_back_to_default() {
        let s: Settings = serde_json::from_str(r#"{"data_dir": "/tmp/x"}"#).unwrap();
        assert_eq!(s.currency_symbol, "₪");
        assert_eq!(s.data_dir, "/tmp/x");
    }

    #[test]
    fn test_shellexpand_tilde() {
        if let Some(home) = dirs::home_dir() {
            let expanded = shellexpand_path("~/books");
            assert_eq!(expanded, format!("{}/books", home.to_string_lossy()));
        }
    }
}
