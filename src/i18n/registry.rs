//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the application
//! ships catalogs for. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access. The declaration order matters: prefix
//! matching walks the locales in this order.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// BCP 47 style tag (e.g., "en-US", "zh-CN")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Simplified Chinese")
    pub name: &'static str,

    /// Label shown in the language switcher (e.g., "简体中文")
    pub display_name: &'static str,

    /// Directory form used for on-disk resources (e.g., "zh_CN")
    pub fs_code: &'static str,

    /// Whether this is the default/fallback locale (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact tag.
    ///
    /// The comparison is case-sensitive: `"en-us"` is not `"en-US"`.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get the first locale, in declaration order, whose tag starts with `prefix`.
    ///
    /// An empty prefix matches the first declared locale.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.code.starts_with(prefix))
    }

    /// All locales in declaration order.
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not declare exactly one default locale,
    /// which is a configuration error.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a tag names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations, in matching order.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en-US",
            name: "English",
            display_name: "English",
            fs_code: "en_US",
            is_default: false,
        },
        LocaleConfig {
            code: "zh-CN",
            name: "Simplified Chinese",
            display_name: "简体中文",
            fs_code: "zh_CN",
            is_default: true,
        },
        LocaleConfig {
            code: "zh-TW",
            name: "Traditional Chinese",
            display_name: "繁體中文",
            fs_code: "zh_TW",
            is_default: false,
        },
    ]
}
