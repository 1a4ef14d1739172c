//! Optional RON settings for the terminal client.
//!
//! Looked up at `$ENUMLAND_CONFIG`, else `./enumland.ron`. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use enumland_core::{QueryClientSettings, DEFAULT_DEBOUNCE};
use enumland_engine::EngineSettings;
use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "ENUMLAND_CONFIG";
const CONFIG_FILENAME: &str = "enumland.ron";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    base_url: String,
    debounce_ms: u64,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    cache_results: bool,
    log_file: String,
    log_level: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            base_url: engine.base_url,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            connect_timeout_ms: None,
            request_timeout_ms: None,
            cache_results: QueryClientSettings::default().cache_results,
            log_file: enumland_logging::DEFAULT_LOG_FILE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub engine: EngineSettings,
    pub client: QueryClientSettings,
    pub debounce: Duration,
    /// `None` disables logging.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        resolve(RawSettings::default(), &mut Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    Defaults,
    File(PathBuf),
}

/// Settings plus what happened while loading them.
///
/// Warnings are collected rather than logged because the logger is only
/// configured once the settings are known.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: SettingsSource,
    pub warnings: Vec<String>,
}

pub fn load() -> LoadedSettings {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    load_from(&path)
}

pub fn load_from(path: &Path) -> LoadedSettings {
    let mut warnings = Vec::new();
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return LoadedSettings {
                settings: Settings::default(),
                source: SettingsSource::Defaults,
                warnings,
            };
        }
        Err(err) => {
            warnings.push(format!("Failed to read settings from {:?}: {}", path, err));
            return LoadedSettings {
                settings: Settings::default(),
                source: SettingsSource::Defaults,
                warnings,
            };
        }
    };

    let raw: RawSettings = match ron::from_str(&content) {
        Ok(raw) => raw,
        Err(err) => {
            warnings.push(format!("Failed to parse settings from {:?}: {}", path, err));
            return LoadedSettings {
                settings: Settings::default(),
                source: SettingsSource::Defaults,
                warnings,
            };
        }
    };

    let settings = resolve(raw, &mut warnings);
    LoadedSettings {
        settings,
        source: SettingsSource::File(path.to_path_buf()),
        warnings,
    }
}

fn resolve(raw: RawSettings, warnings: &mut Vec<String>) -> Settings {
    let defaults = EngineSettings::default();

    let base_url = if raw.base_url.trim().is_empty() {
        warnings.push(format!(
            "Empty base_url in settings; using {}",
            defaults.base_url
        ));
        defaults.base_url
    } else {
        raw.base_url.trim().to_string()
    };

    let log_level = match raw.log_level.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            warnings.push(format!(
                "Unknown log_level {:?} in settings; using info",
                raw.log_level
            ));
            LevelFilter::Info
        }
    };

    let log_file = if raw.log_file.is_empty() {
        None
    } else {
        Some(PathBuf::from(raw.log_file))
    };

    Settings {
        engine: EngineSettings {
            base_url,
            user_agent: defaults.user_agent,
            connect_timeout: raw.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: raw.request_timeout_ms.map(Duration::from_millis),
        },
        client: QueryClientSettings {
            cache_results: raw.cache_results,
        },
        debounce: Duration::from_millis(raw.debounce_ms),
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = load_from(&temp.path().join("absent.ron"));

        assert_eq!(loaded.source, SettingsSource::Defaults);
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.settings.debounce, Duration::from_millis(500));
        assert_eq!(loaded.settings.engine.base_url, "http://localhost:3000");
        assert_eq!(loaded.settings.engine.request_timeout, None);
        assert!(loaded.settings.client.cache_results);
        assert_eq!(
            loaded.settings.log_file,
            Some(PathBuf::from("./enumland.log"))
        );
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            &temp,
            r#"(
                base_url: "https://enum.land",
                debounce_ms: 250,
                request_timeout_ms: Some(3000),
                cache_results: false,
            )"#,
        );

        let loaded = load_from(&path);

        assert_eq!(loaded.source, SettingsSource::File(path));
        assert!(loaded.warnings.is_empty());
        let settings = loaded.settings;
        assert_eq!(settings.engine.base_url, "https://enum.land");
        assert_eq!(settings.debounce, Duration::from_millis(250));
        assert_eq!(
            settings.engine.request_timeout,
            Some(Duration::from_millis(3000))
        );
        assert_eq!(settings.engine.connect_timeout, None);
        assert!(!settings.client.cache_results);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn unparsable_file_falls_back_with_warning() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "(debounce_ms: \"soon\")");

        let loaded = load_from(&path);

        assert_eq!(loaded.source, SettingsSource::Defaults);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].starts_with("Failed to parse settings"));
        assert_eq!(loaded.settings, Settings::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "(retries: 3)");

        let loaded = load_from(&path);

        assert_eq!(loaded.source, SettingsSource::Defaults);
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn empty_values_are_repaired() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            &temp,
            r#"(base_url: "  ", log_file: "", log_level: "chatty")"#,
        );

        let loaded = load_from(&path);

        assert_eq!(loaded.warnings.len(), 2);
        assert_eq!(loaded.settings.engine.base_url, "http://localhost:3000");
        assert_eq!(loaded.settings.log_file, None);
        assert_eq!(loaded.settings.log_level, LevelFilter::Info);
    }
}
