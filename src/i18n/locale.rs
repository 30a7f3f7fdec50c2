//! Locale type: a validated member of the supported-locale set.
//!
//! A `Locale` can only be obtained from the registry (or one of the
//! constants), so holding one proves the value is supported.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{I18nError, Result};
use crate::i18n::{LocaleConfig, LocaleRegistry};

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// English (United States).
    pub const EN_US: Locale = Locale { code: "en-US" };

    /// Simplified Chinese. This is also the default and fallback locale.
    pub const ZH_CN: Locale = Locale { code: "zh-CN" };

    /// Traditional Chinese.
    pub const ZH_TW: Locale = Locale { code: "zh-TW" };

    /// Create a Locale from an exact tag such as `"en-US"`.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the tag is in the supported set
    /// * `Err(I18nError::UnsupportedLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(Locale::from_config)
            .ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))
    }

    pub(crate) fn from_config(config: &LocaleConfig) -> Locale {
        Locale { code: config.code }
    }

    /// The default locale declared by the registry.
    pub fn default_locale() -> Locale {
        Locale::from_config(LocaleRegistry::get().default_locale())
    }

    /// The tag, e.g. `"zh-TW"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    /// Human-readable label for the language switcher.
    pub fn display_name(&self) -> &'static str {
        self.config().display_name
    }

    /// English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Directory form used for on-disk resources (`"zh_CN"`).
    pub fn fs_code(&self) -> &'static str {
        self.config().fs_code
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Locale::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// Every supported locale, in declaration order.
pub fn supported_locales() -> Vec<Locale> {
    LocaleRegistry::get()
        .list_all()
        .iter()
        .map(Locale::from_config)
        .collect()
}

/// Locale → switcher label, one entry per supported locale.
pub fn locale_names() -> Vec<(Locale, &'static str)> {
    LocaleRegistry::get()
        .list_all()
        .iter()
        .map(|config| (Locale::from_config(config), config.display_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Constant Tests ====================

    #[test]
    fn test_constants_are_registered() {
        for locale in [Locale::EN_US, Locale::ZH_CN, Locale::ZH_TW] {
            assert!(LocaleRegistry::get().is_supported(locale.code()));
        }
    }

    #[test]
    fn test_default_locale_is_zh_cn() {
        assert_eq!(Locale::default(), Locale::ZH_CN);
        assert!(Locale::ZH_CN.is_default());
        assert!(!Locale::EN_US.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_valid() {
        let locale = Locale::from_code("zh-TW").expect("Should succeed");
        assert_eq!(locale, Locale::ZH_TW);
        assert_eq!(locale.display_name(), "繁體中文");
        assert_eq!(locale.fs_code(), "zh_TW");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr-FR");
        assert!(matches!(result, Err(I18nError::UnsupportedLocale(code)) if code == "fr-FR"));
    }

    #[test]
    fn test_from_code_prefix_only_is_rejected() {
        assert!(Locale::from_code("en").is_err());
        assert!(Locale::from_code("").is_err());
    }

    // ==================== Names Tests ====================

    #[test]
    fn test_locale_names_cover_supported_set_exactly() {
        let names = locale_names();
        let supported: HashSet<_> = supported_locales().into_iter().collect();
        let named: HashSet<_> = names.iter().map(|(locale, _)| *locale).collect();

        assert_eq!(names.len(), supported.len());
        assert_eq!(named, supported);
    }

    #[test]
    fn test_locale_names_labels() {
        let names = locale_names();
        assert_eq!(
            names,
            vec![
                (Locale::EN_US, "English"),
                (Locale::ZH_CN, "简体中文"),
                (Locale::ZH_TW, "繁體中文"),
            ]
        );
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_tag() {
        let json = serde_json::to_string(&Locale::EN_US).expect("Should serialize");
        assert_eq!(json, "\"en-US\"");
    }

    #[test]
    fn test_deserialize_rejects_unsupported() {
        let result: std::result::Result<Locale, _> = serde_json::from_str("\"de-DE\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::ZH_CN.to_string(), "zh-CN");
    }
}
