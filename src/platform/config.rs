// Raverte - platform/config.rs
//
// Optional config.toml loading with startup validation.

use crate::util::constants;
use std::path::{Path, PathBuf};

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[storage]` section.
    pub storage: StorageSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// `[storage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Override for the data directory holding profile.json and keystore.dat.
    pub data_dir: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging level string (applied before tracing is initialised).
    pub log_level: Option<String>,

    /// Log file path.
    pub log_file: Option<String>,

    /// Data directory override.
    pub data_dir: Option<PathBuf>,
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no
/// warnings (first-run). If the file is unreadable or unparseable,
/// returns defaults with a warning -- the application still starts but
/// the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (config, warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (config, warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (config, warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    // -- Storage: data_dir --
    if let Some(ref dir) = raw.storage.data_dir {
        if dir.is_empty() {
            warnings.push("[storage] data_dir is empty. Ignoring.".to_string());
        } else {
            config.data_dir = Some(PathBuf::from(dir));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_yields_defaults_without_warnings() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty());
        assert!(config.log_level.is_none());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn valid_sections_are_applied() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(constants::CONFIG_FILE_NAME),
            "[logging]\nlevel = \"debug\"\nfile = \"raverte.log\"\n\n\
             [storage]\ndata_dir = \"/srv/raverte\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("raverte.log"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/raverte")));
    }

    #[test]
    fn empty_log_file_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(constants::CONFIG_FILE_NAME),
            "[logging]\nfile = \"\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn invalid_level_warns_and_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(constants::CONFIG_FILE_NAME),
            "[logging]\nlevel = \"verbose\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(tmp.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn unparseable_toml_warns_and_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(constants::CONFIG_FILE_NAME),
            "[logging\nlevel = ",
        )
        .unwrap();

        let (config, warnings) = load_config(tmp.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(constants::CONFIG_FILE_NAME),
            "[logging]\nlevel = \"warn\"\nfuture_knob = true\n\n[telemetry]\nenabled = false\n",
        )
        .unwrap();

        let (config, warnings) = load_config(tmp.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }
}
