// Raverte - platform/paths.rs
//
// Platform-specific config and data directory resolution.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. An explicit data-dir override (CLI flag
// or config file) always wins, which is also what makes the rest of
// the crate testable against a temp directory.

use crate::util::constants;
use crate::util::error::AssetError;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Resolved platform paths for Raverte data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/raverte/ or %APPDATA%\Raverte\)
    pub config_dir: PathBuf,

    /// Data directory holding user assets (profile.json, keystore.dat).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// `data_dir_override` takes priority over the platform default and
    /// doubles as the config directory. Fails with
    /// [`AssetError::PathResolution`] when no override is given and the
    /// platform directories cannot be determined (e.g. no home directory).
    pub fn resolve(data_dir_override: Option<PathBuf>) -> Result<Self, AssetError> {
        if let Some(dir) = data_dir_override {
            tracing::debug!(data = %dir.display(), "Using explicit data directory");
            return Ok(Self {
                config_dir: dir.clone(),
                data_dir: dir,
            });
        }

        let proj_dirs =
            ProjectDirs::from("", "", constants::APP_ID).ok_or(AssetError::PathResolution)?;

        let config_dir = proj_dirs.config_dir().to_path_buf();
        let data_dir = proj_dirs.data_dir().to_path_buf();

        tracing::debug!(
            config = %config_dir.display(),
            data = %data_dir.display(),
            "Platform paths resolved"
        );

        Ok(Self {
            config_dir,
            data_dir,
        })
    }
}
