//! Wallet store location and first-run setup.
//!
//! The data directory is resolved in priority order:
//!
//! 1. `CREDZ_DATA` environment variable — also the hook end-to-end tests
//!    use to point the CLI at a temporary directory.
//! 2. The OS-appropriate data directory via the `directories` crate
//!    (e.g. `~/.local/share/credz` on Linux).
//!
//! [`ensure_initialized`] is idempotent: it creates the directory and drops
//! an annotated `credz.toml` template on first run, and does nothing after
//! that.

use crate::config::{WalletConfig, CONFIG_FILE};
use crate::error::{Result, WalletError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_ENV_VAR: &str = "CREDZ_DATA";

/// Resolve the wallet data directory without touching the filesystem.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_ENV_VAR) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let dirs = ProjectDirs::from("", "", "credz").ok_or_else(|| {
        WalletError::Store("Could not determine a data directory for this platform".to_string())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Create the data directory and a starter config file if they don't exist.
/// Returns true if anything was created.
pub fn ensure_initialized(data_dir: &Path) -> Result<bool> {
    let mut created = false;

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(WalletError::Io)?;
        created = true;
    }

    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, WalletConfig::template()).map_err(WalletError::Io)?;
        created = true;
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_initialized_creates_dir_and_config() {
        let temp = tempfile::tempdir().unwrap();
        let data_dir = temp.path().join("wallet");

        let created = ensure_initialized(&data_dir).unwrap();
        assert!(created);
        assert!(data_dir.join(CONFIG_FILE).exists());

        // Second run is a no-op.
        let created_again = ensure_initialized(&data_dir).unwrap();
        assert!(!created_again);
    }

    #[test]
    fn starter_config_loads_back_as_defaults() {
        let temp = tempfile::tempdir().unwrap();
        ensure_initialized(temp.path()).unwrap();

        let config = WalletConfig::load(temp.path()).unwrap();
        assert_eq!(config, WalletConfig::default());
    }
}
