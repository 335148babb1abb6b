// Raverte - main.rs
//
// CLI entry point for inspecting and managing the Raverte user profile.
// Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Command dispatch against the profile store

use clap::{Parser, Subcommand, ValueEnum};
use raverte_userdata::app::profile::ProfileStore;
use raverte_userdata::platform::assets::AssetStore;
use raverte_userdata::platform::config;
use raverte_userdata::platform::paths::PlatformPaths;
use raverte_userdata::util;
use raverte_userdata::util::error::UserdataError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raverte-profile", version, about)]
struct Cli {
    /// Directory holding profile.json and keystore.dat (overrides the
    /// platform default and any config.toml setting).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the profile with default values (fresh install).
    Init,

    /// Load the profile and print it.
    Show,

    /// Enable or disable the credential keystore feature.
    Keystore {
        /// New state of the keystore flag.
        state: KeystoreState,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KeystoreState {
    On,
    Off,
}

fn main() {
    let cli = Cli::parse();

    // Config lives in the platform config dir; it can only be found when
    // platform dirs resolve, so look it up with no override first and
    // fall back to defaults when that fails.
    let (app_config, config_warnings) = match PlatformPaths::resolve(None) {
        Ok(paths) => config::load_config(&paths.config_dir),
        Err(_) => (config::AppConfig::default(), Vec::new()),
    };

    util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "raverte-profile starting"
    );

    if let Err(e) = run(&cli, &app_config) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, app_config: &config::AppConfig) -> Result<(), UserdataError> {
    // Data directory priority: CLI flag > config.toml > platform default.
    let data_dir_override = cli.data_dir.clone().or_else(|| app_config.data_dir.clone());
    let paths = PlatformPaths::resolve(data_dir_override)?;

    let store = ProfileStore::new(AssetStore::new(paths.data_dir));

    match cli.command {
        Command::Init => {
            let profile = store.initialise()?;
            println!("Profile created for '{}'", profile.name);
        }
        Command::Show => {
            let profile = store.load()?;
            println!("name:     {}", profile.name);
            println!("keystore: {}", if profile.keystore { "on" } else { "off" });
        }
        Command::Keystore { state } => {
            let mut profile = store.load()?;
            let value = matches!(state, KeystoreState::On);
            store.update_keystore(&mut profile, value)?;
            println!("Keystore {}", if value { "enabled" } else { "disabled" });
        }
    }

    Ok(())
}
