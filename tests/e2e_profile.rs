// Raverte - tests/e2e_profile.rs
//
// End-to-end tests for the profile lifecycle against a real filesystem:
// real platform paths (overridden to a temp directory), real asset
// checks, real JSON on disk. No mocks, no stubs.

use raverte_userdata::app::profile::{Profile, ProfileStore};
use raverte_userdata::platform::assets::{AssetKind, AssetStore};
use raverte_userdata::util::error::{AssetError, ProfileError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// A profile store rooted in a fresh temp data directory.
fn fresh_store(tmp: &TempDir) -> ProfileStore {
    ProfileStore::new(AssetStore::new(tmp.path().to_path_buf()))
}

fn profile_path(tmp: &TempDir) -> std::path::PathBuf {
    AssetStore::new(tmp.path().to_path_buf()).resolve(AssetKind::Profile)
}

fn write_raw(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// =============================================================================
// Initialisation
// =============================================================================

/// A fresh install writes the default profile to disk.
#[test]
fn e2e_initialise_writes_default_values() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    let profile = store.initialise().unwrap();
    assert_eq!(profile, Profile::default());

    let on_disk: serde_json::Value =
        serde_json::from_slice(&fs::read(profile_path(&tmp)).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({"name": "Trader J", "keystore": false})
    );
}

/// Initialising twice fails the second time with AlreadyExists.
#[test]
fn e2e_initialise_twice_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    store.initialise().unwrap();
    let err = store.initialise().unwrap_err();
    assert!(
        matches!(err, ProfileError::AlreadyExists { .. }),
        "expected AlreadyExists, got {err:?}"
    );
}

/// The profile file is owner read/write only on Unix.
#[cfg(unix)]
#[test]
fn e2e_profile_file_mode_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    fresh_store(&tmp).initialise().unwrap();

    let mode = fs::metadata(profile_path(&tmp)).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600, "mode was {mode:o}");
}

/// Existence-check failures other than "missing" propagate from
/// initialise instead of being treated as a fresh install. A regular
/// file where the data directory should be makes the check fail with
/// ENOTDIR rather than NotFound.
#[cfg(unix)]
#[test]
fn e2e_initialise_propagates_check_failure() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("data");
    fs::write(&blocker, b"not a directory").unwrap();

    let store = ProfileStore::new(AssetStore::new(blocker.clone()));
    let err = store.initialise().unwrap_err();
    assert!(
        matches!(err, ProfileError::Asset(AssetError::Check { .. })),
        "expected Check, got {err:?}"
    );

    // Nothing was created or overwritten along the way.
    assert_eq!(fs::read(&blocker).unwrap(), b"not a directory");
}

// =============================================================================
// Loading
// =============================================================================

/// Loading after initialisation returns the defaults.
#[test]
fn e2e_load_after_initialise_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    store.initialise().unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, Profile::default());
}

/// Loading with no profile on disk reports a missing asset.
#[test]
fn e2e_load_without_profile_reports_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = fresh_store(&tmp).load().unwrap_err();
    assert!(
        matches!(err, ProfileError::Asset(AssetError::NotFound { .. })),
        "expected NotFound, got {err:?}"
    );
}

/// Invalid JSON on disk surfaces as a parse error.
#[test]
fn e2e_load_invalid_json_reports_parse_error() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    store.initialise().unwrap();
    write_raw(&profile_path(&tmp), "{\"name\": \"Trader J\", \"keysto");

    let err = store.load().unwrap_err();
    assert!(
        matches!(err, ProfileError::Parse { .. }),
        "expected Parse, got {err:?}"
    );
}

// =============================================================================
// Keystore updates
// =============================================================================

/// An updated keystore flag is visible to a fresh load.
#[test]
fn e2e_keystore_update_survives_reload() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    let mut profile = store.initialise().unwrap();
    store.update_keystore(&mut profile, true).unwrap();
    assert!(profile.keystore);

    // Fresh store over the same directory, as a new process would see it.
    let reloaded = fresh_store(&tmp).load().unwrap();
    assert!(reloaded.keystore);
    assert_eq!(reloaded.name, "Trader J");
}

/// Turning the flag back off persists as well.
#[test]
fn e2e_keystore_toggle_round_trip() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    let mut profile = store.initialise().unwrap();
    store.update_keystore(&mut profile, true).unwrap();
    store.update_keystore(&mut profile, false).unwrap();

    let reloaded = fresh_store(&tmp).load().unwrap();
    assert!(!reloaded.keystore);
}

// =============================================================================
// Round-trip
// =============================================================================

/// Any valid profile written through an update is reproduced by a load.
#[test]
fn e2e_write_then_load_reproduces_values() {
    let tmp = TempDir::new().unwrap();
    let store = fresh_store(&tmp);

    let mut profile = store.initialise().unwrap();
    profile.name = "Ada".to_string();
    // update_keystore persists the whole record, name change included.
    store.update_keystore(&mut profile, true).unwrap();

    let reloaded = fresh_store(&tmp).load().unwrap();
    assert_eq!(reloaded, profile);
    assert_eq!(reloaded.name, "Ada");
    assert!(reloaded.keystore);
}
