// Raverte - app/profile.rs
//
// The persisted user profile and its lifecycle: initialise on first
// install, load from disk, update the keystore flag, write back.
//
// Every mutation is persisted synchronously. There is no atomic rename
// and no locking; a crash mid-write can corrupt the file. The desktop
// client treats that as a reinstall scenario.

use crate::platform::assets::{AssetKind, AssetStore};
use crate::util::constants;
use crate::util::error::{AssetError, ProfileError};
use std::path::PathBuf;

/// The persisted user settings record.
///
/// Serialises to a JSON object with exactly these two keys; unknown
/// keys on disk are rejected at load time rather than silently dropped
/// on the next write.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name shown in the client.
    pub name: String,

    /// Whether the separate credential keystore feature is enabled.
    pub keystore: bool,
}

impl Default for Profile {
    /// Values written on a fresh install.
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_PROFILE_NAME.to_string(),
            keystore: false,
        }
    }
}

/// Loads and persists the user profile through an injected [`AssetStore`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    assets: AssetStore,
}

impl ProfileStore {
    pub fn new(assets: AssetStore) -> Self {
        Self { assets }
    }

    fn profile_path(&self) -> PathBuf {
        self.assets.resolve(AssetKind::Profile)
    }

    /// Create the profile for a fresh installation.
    ///
    /// Fails with [`ProfileError::AlreadyExists`] if the profile file is
    /// already present. Existence-check failures other than "missing"
    /// propagate unchanged.
    pub fn initialise(&self) -> Result<Profile, ProfileError> {
        let path = self.profile_path();

        match self.assets.check(&path) {
            Ok(()) => return Err(ProfileError::AlreadyExists { path }),
            Err(AssetError::NotFound { .. }) => self.assets.configure(&path)?,
            Err(e) => return Err(e.into()),
        }

        let profile = Profile::default();
        self.write(&profile)?;

        tracing::info!(path = %path.display(), "Profile initialised with default values");
        Ok(profile)
    }

    /// Load the profile from disk.
    pub fn load(&self) -> Result<Profile, ProfileError> {
        let path = self.profile_path();

        self.assets.check(&path)?;

        let bytes = std::fs::read(&path).map_err(|e| ProfileError::Read {
            path: path.clone(),
            source: e,
        })?;

        let profile: Profile =
            serde_json::from_slice(&bytes).map_err(|e| ProfileError::Parse {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), "Profile loaded");
        Ok(profile)
    }

    /// Set the keystore flag and persist immediately.
    pub fn update_keystore(
        &self,
        profile: &mut Profile,
        value: bool,
    ) -> Result<(), ProfileError> {
        profile.keystore = value;
        self.write(profile)?;

        tracing::info!(keystore = value, "Keystore flag updated");
        Ok(())
    }

    /// Serialise the in-memory profile and write it to disk.
    ///
    /// The file is written with the platform default mode, then
    /// tightened to owner read/write on Unix -- the profile sits next
    /// to credential-store assets.
    fn write(&self, profile: &Profile) -> Result<(), ProfileError> {
        let path = self.profile_path();

        let bytes =
            serde_json::to_vec(profile).map_err(|e| ProfileError::Serialize { source: e })?;

        std::fs::write(&path, bytes).map_err(|e| ProfileError::Write {
            path: path.clone(),
            source: e,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).map_err(
                |e| ProfileError::Write {
                    path: path.clone(),
                    source: e,
                },
            )?;
        }

        Ok(())
    }
}
