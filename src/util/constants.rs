// Raverte - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Raverte";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Raverte";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Asset file names
// =============================================================================

/// File name of the persisted user profile.
pub const PROFILE_FILE_NAME: &str = "profile.json";

/// File name of the credential keystore. Keystore contents are managed
/// elsewhere; this crate only resolves and creates the file.
pub const KEYSTORE_FILE_NAME: &str = "keystore.dat";

/// File name of the optional application config.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Profile defaults
// =============================================================================

/// Placeholder display name written on first install.
pub const DEFAULT_PROFILE_NAME: &str = "Trader J";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
