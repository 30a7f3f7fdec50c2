//! Locale resolution.
//!
//! Two policies live here:
//! - startup resolution (stored preference > platform language > default),
//!   matching exact tags first and then the language prefix in registry order;
//! - `Accept-Language` negotiation for incoming requests, which also knows
//!   that `zh-Hant` means Traditional Chinese.

use tracing::debug;

use crate::i18n::{Locale, LocaleRegistry, LocaleStore};

/// Substituted when the platform reports no language at all.
pub const DEFAULT_PLATFORM_TAG: &str = "zh-CN";

/// Source of the platform's language preference.
pub trait PlatformLanguage {
    /// Best-effort tag such as `"en-US"`, or `None` when unavailable.
    fn preferred_language(&self) -> Option<String>;
}

/// Asks the operating system via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguage;

impl PlatformLanguage for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale().or_else(|| sys_locale::get_locales().next())
    }
}

/// A fixed answer, used for overrides and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedLanguage(Option<String>);

impl FixedLanguage {
    pub fn new(tag: Option<String>) -> Self {
        Self(tag)
    }

    pub fn tag(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl PlatformLanguage for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Match a tag against the supported set: exact first, then by language prefix.
pub fn match_locale(tag: &str) -> Option<Locale> {
    let registry = LocaleRegistry::get();

    if let Some(config) = registry.get_by_code(tag) {
        return Some(Locale::from_config(config));
    }

    let prefix = tag.split('-').next().unwrap_or_default();
    registry.first_with_prefix(prefix).map(Locale::from_config)
}

/// Locale implied by the platform language, or the default when nothing matches.
pub fn detect_locale(platform: &dyn PlatformLanguage) -> Locale {
    let tag = platform
        .preferred_language()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| DEFAULT_PLATFORM_TAG.to_string());

    match match_locale(&tag) {
        Some(locale) => {
            debug!("Platform language {} resolved to {}", tag, locale);
            locale
        }
        None => {
            debug!("Platform language {} is unsupported, using default", tag);
            Locale::default_locale()
        }
    }
}

/// Startup locale: a valid stored preference wins, otherwise detection.
pub fn initial_locale(store: &dyn LocaleStore, platform: &dyn PlatformLanguage) -> Locale {
    if let Some(saved) = store.load() {
        if let Ok(locale) = Locale::from_code(&saved) {
            debug!("Using saved locale preference {}", locale);
            return locale;
        }
        debug!("Ignoring unsupported saved locale '{}'", saved);
    }

    detect_locale(platform)
}

/// Locale for a request given its `Accept-Language` header.
///
/// Only the first (highest priority) entry is considered.
pub fn negotiate(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default_locale();
    };

    let first = header.split(',').next().unwrap_or_default();
    let tag = first.split(';').next().unwrap_or_default().trim();

    if let Ok(locale) = Locale::from_code(tag) {
        return locale;
    }

    if tag.starts_with("zh") {
        if tag.contains("TW") || tag.contains("Hant") {
            return Locale::ZH_TW;
        }
        return Locale::ZH_CN;
    }
    if tag.starts_with("en") {
        return Locale::EN_US;
    }

    Locale::default_locale()
}

/// Directory form of a tag (`"en-US"` → `"en_US"`), defaulting for unknown tags.
pub fn to_fs_locale(tag: &str) -> &'static str {
    match Locale::from_code(tag) {
        Ok(locale) => locale.fs_code(),
        Err(_) => match tag {
            "zh-cn" | "zh" => Locale::ZH_CN.fs_code(),
            "en-us" | "en" => Locale::EN_US.fs_code(),
            "zh-tw" | "zh-Hant" => Locale::ZH_TW.fs_code(),
            _ => Locale::default_locale().fs_code(),
        },
    }
}
