// Raverte - platform/assets.rs
//
// The asset store: resolution, existence checks, and creation of the
// named files Raverte keeps in its data directory.
//
// Existence checks report a tagged NotFound variant derived from
// io::ErrorKind, so callers never branch on error-message text.

use crate::util::constants;
use crate::util::error::AssetError;
use std::io;
use std::path::{Path, PathBuf};

/// The on-disk assets managed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The user profile (profile.json).
    Profile,

    /// The credential keystore (keystore.dat). Only the path is managed
    /// here; the contents belong to the credential subsystem.
    Keystore,
}

impl AssetKind {
    /// File name of this asset inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Profile => constants::PROFILE_FILE_NAME,
            Self::Keystore => constants::KEYSTORE_FILE_NAME,
        }
    }
}

/// Resolves and manages asset files under a single data directory.
///
/// Constructed once from resolved [`PlatformPaths`](super::paths::PlatformPaths)
/// and passed explicitly to whoever needs disk access.
#[derive(Debug, Clone)]
pub struct AssetStore {
    data_dir: PathBuf,
}

impl AssetStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Absolute path of the given asset.
    pub fn resolve(&self, kind: AssetKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Check that the asset at `path` exists and is accessible.
    ///
    /// Returns [`AssetError::NotFound`] when the file is missing and
    /// [`AssetError::Check`] for any other failure (permissions, an
    /// unreadable parent directory, ...).
    pub fn check(&self, path: &Path) -> Result<(), AssetError> {
        match std::fs::metadata(path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AssetError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(AssetError::Check {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Create the asset at `path`: parent directories plus an empty file.
    ///
    /// Callers are expected to write real content immediately afterwards.
    pub fn configure(&self, path: &Path) -> Result<(), AssetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AssetError::Create {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::File::create(path).map_err(|e| AssetError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Asset created");
        Ok(())
    }
}
