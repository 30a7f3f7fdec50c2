use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::i18n::CatalogOptions;

pub const DEFAULT_PORT: u16 = 12398;
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Storage
    pub data_dir: PathBuf,
    pub prompts_dir: PathBuf,

    // Locale
    pub lang_override: Option<String>,
    pub missing_warn: bool,
    pub fallback_warn: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid PORT value: {}", value))?,
                Err(_) => DEFAULT_PORT,
            },

            // Storage
            data_dir: std::env::var("REDINK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            prompts_dir: std::env::var("REDINK_PROMPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("prompts")),

            // Locale
            lang_override: std::env::var("REDINK_LANG")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            missing_warn: env_flag("I18N_MISSING_WARN"),
            fallback_warn: env_flag("I18N_FALLBACK_WARN"),
        })
    }

    /// Path of the JSON file holding the persisted locale preference.
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            missing_warn: self.missing_warn,
            fallback_warn: self.fallback_warn,
            ..CatalogOptions::default()
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "redink", "RedInk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
