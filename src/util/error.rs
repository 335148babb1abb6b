// Raverte - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: the cause of an existence-check
// failure is carried as a variant, never recovered by matching on an
// error message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all userdata operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum UserdataError {
    /// Profile initialisation, loading, or persistence failed.
    Profile(ProfileError),

    /// Asset path resolution or filesystem checks failed.
    Asset(AssetError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for UserdataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(e) => write!(f, "Profile error: {e}"),
            Self::Asset(e) => write!(f, "Asset error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for UserdataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Profile(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Asset errors
// ---------------------------------------------------------------------------

/// Errors produced at the asset-store boundary: path resolution,
/// existence checks, and asset creation.
#[derive(Debug)]
pub enum AssetError {
    /// Platform config/data directories could not be determined and no
    /// explicit data directory was supplied.
    PathResolution,

    /// The asset does not exist on disk.
    ///
    /// Distinguished from [`AssetError::Check`] so callers can branch on
    /// "missing" without inspecting I/O error internals.
    NotFound { path: PathBuf },

    /// The existence check failed for a reason other than the asset
    /// being missing (permissions, unreadable parent, ...).
    Check { path: PathBuf, source: io::Error },

    /// Creating the asset (parent directories or the file itself) failed.
    Create { path: PathBuf, source: io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathResolution => write!(
                f,
                "Could not determine platform application directories; \
                 pass an explicit data directory"
            ),
            Self::NotFound { path } => {
                write!(f, "Asset '{}' does not exist", path.display())
            }
            Self::Check { path, source } => {
                write!(f, "Cannot access asset '{}': {source}", path.display())
            }
            Self::Create { path, source } => {
                write!(f, "Cannot create asset '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Check { source, .. } => Some(source),
            Self::Create { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<AssetError> for UserdataError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

// ---------------------------------------------------------------------------
// Profile errors
// ---------------------------------------------------------------------------

/// Errors related to the user profile lifecycle.
#[derive(Debug)]
pub enum ProfileError {
    /// Initialisation was requested but the profile file already exists.
    AlreadyExists { path: PathBuf },

    /// An asset-store operation failed while handling the profile.
    Asset(AssetError),

    /// Reading the profile file failed.
    Read { path: PathBuf, source: io::Error },

    /// The profile file contains invalid JSON (or unknown keys).
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Serialising the in-memory profile to JSON failed.
    Serialize { source: serde_json::Error },

    /// Writing the profile file failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists { path } => {
                write!(f, "Profile '{}' already exists", path.display())
            }
            Self::Asset(e) => write!(f, "{e}"),
            Self::Read { path, source } => {
                write!(f, "Cannot read profile '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(
                    f,
                    "Cannot parse profile '{}': {source}",
                    path.display()
                )
            }
            Self::Serialize { source } => {
                write!(f, "Cannot serialise profile: {source}")
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write profile '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asset(e) => Some(e),
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize { source } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::AlreadyExists { .. } => None,
        }
    }
}

impl From<AssetError> for ProfileError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}

impl From<ProfileError> for UserdataError {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for UserdataError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for userdata results.
pub type Result<T> = std::result::Result<T, UserdataError>;
