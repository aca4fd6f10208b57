// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Loading and persisting `AppConfig` as pretty-printed JSON.

use std::path::{Path, PathBuf};

use labelwerk_core::AppConfig;
use labelwerk_core::error::Result;
use tracing::{debug, info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Config file location: the explicit path if given, else the data directory.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => data_dir::data_dir().join(CONFIG_FILE),
    }
}

/// Read the config at `path`. Missing or unreadable files yield the defaults.
pub fn load_config(path: &Path) -> AppConfig {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "No config file, using defaults");
            return AppConfig::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Config file unreadable, using defaults");
            AppConfig::default()
        }
    }
}

/// Write `config` to `path`, creating the parent directory.
pub fn persist_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "Config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelwerk_core::SheetPreset;

    #[test]
    fn persisted_config_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join(CONFIG_FILE);

        let mut config = AppConfig::default();
        config.default_preset = SheetPreset::A4FullPage;
        config.render.bar_height = 50;
        persist_config(&path, &config).unwrap();

        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        assert_eq!(load_config(&path), AppConfig::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = Path::new("/etc/labelwerk.json");
        assert_eq!(config_path(Some(explicit)), explicit);
        assert!(config_path(None).ends_with("labelwerk/config.json"));
    }
}
