//! # Configuration
//!
//! Wallet configuration is managed by [`confique`], loaded from a TOML file
//! in the wallet data directory with environment-variable overrides.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `CREDZ_DEFAULT_SORT`, `CREDZ_DEFAULT_ORDER`,
//!    `CREDZ_EXPIRY_WARN_DAYS`.
//! 2. **Config file**: `<data dir>/credz.toml`.
//! 3. **Compiled defaults** via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_sort` | `issued` | List sort field (`issued`, `name`, `expiry`) |
//! | `default_order` | `desc` | List sort direction (`asc`, `desc`) |
//! | `expiry_warn_days` | `30` | Window for the "expires soon" badge |

use crate::commands::list::SortField;
use crate::error::{Result, WalletError};
use crate::filters::SortOrder;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "credz.toml";

/// Configuration for credz, stored in `credz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Default sort field for `credz list` ("issued", "name" or "expiry").
    #[config(env = "CREDZ_DEFAULT_SORT", default = "issued")]
    pub default_sort: String,

    /// Default sort direction for `credz list` ("asc" or "desc").
    #[config(env = "CREDZ_DEFAULT_ORDER", default = "desc")]
    pub default_order: String,

    /// How many days before expiry a document gets the "expires soon" badge.
    #[config(env = "CREDZ_EXPIRY_WARN_DAYS", default = 30)]
    pub expiry_warn_days: u32,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            default_sort: "issued".to_string(),
            default_order: "desc".to_string(),
            expiry_warn_days: 30,
        }
    }
}

impl WalletConfig {
    /// The configured sort field; unknown values fall back to the default.
    pub fn sort_field(&self) -> SortField {
        self.default_sort.parse().unwrap_or(SortField::IssuedAt)
    }

    /// The configured sort direction; anything but "asc" means descending.
    pub fn sort_order(&self) -> SortOrder {
        if self.default_order.eq_ignore_ascii_case("asc") {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// Load configuration for the wallet at `data_dir`. A missing config
    /// file is fine; defaults and environment overrides still apply.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let builder = Self::builder().env();
        let loaded = if path.exists() {
            builder.file(&path).load()
        } else {
            builder.load()
        };
        loaded.map_err(|e| WalletError::Config(e.to_string()))
    }

    /// An annotated TOML template for a fresh `credz.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalletConfig::default();
        assert_eq!(config.sort_field(), SortField::IssuedAt);
        assert_eq!(config.sort_order(), SortOrder::Descending);
        assert_eq!(config.expiry_warn_days, 30);
    }

    #[test]
    fn test_sort_field_fallback_on_garbage() {
        let config = WalletConfig {
            default_sort: "frobnicate".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_field(), SortField::IssuedAt);
    }

    #[test]
    fn test_sort_order_parsing() {
        let config = WalletConfig {
            default_order: "ASC".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_order(), SortOrder::Ascending);

        let config = WalletConfig {
            default_order: "descending".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_template_mentions_every_key() {
        let template = WalletConfig::template();
        assert!(template.contains("default_sort"));
        assert!(template.contains("default_order"));
        assert!(template.contains("expiry_warn_days"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WalletConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_sort, "issued");
    }

    #[test]
    fn test_load_reads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "default_sort = \"name\"\ndefault_order = \"asc\"\n",
        )
        .unwrap();

        let config = WalletConfig::load(dir.path()).unwrap();
        assert_eq!(config.sort_field(), SortField::Name);
        assert_eq!(config.sort_order(), SortOrder::Ascending);
    }
}
