//! Message catalogs with fallback lookup and `{name}` placeholder formatting.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::i18n::{messages, Locale};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex")
    })
}

/// Key → template strings for one locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    messages: HashMap<&'static str, &'static str>,
}

impl MessageCatalog {
    pub fn new(locale: Locale, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            locale,
            messages: entries.iter().copied().collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.messages.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.messages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Lookup behaviour for [`Catalogs`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogOptions {
    /// Consulted when the requested locale lacks a key
    pub fallback_locale: Locale,
    /// Warn when a key is missing from every catalog
    pub missing_warn: bool,
    /// Warn when the fallback catalog had to be used
    pub fallback_warn: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            fallback_locale: Locale::default_locale(),
            missing_warn: false,
            fallback_warn: false,
        }
    }
}

/// All catalogs, keyed by locale.
#[derive(Debug, Clone)]
pub struct Catalogs {
    catalogs: HashMap<Locale, MessageCatalog>,
    options: CatalogOptions,
}

impl Catalogs {
    pub fn new(catalogs: impl IntoIterator<Item = MessageCatalog>, options: CatalogOptions) -> Self {
        Self {
            catalogs: catalogs
                .into_iter()
                .map(|catalog| (catalog.locale(), catalog))
                .collect(),
            options,
        }
    }

    /// The catalogs compiled into the binary.
    pub fn builtin(options: CatalogOptions) -> Self {
        Self::new(
            [
                MessageCatalog::new(Locale::EN_US, messages::EN_US),
                MessageCatalog::new(Locale::ZH_CN, messages::ZH_CN),
                MessageCatalog::new(Locale::ZH_TW, messages::ZH_TW),
            ],
            options,
        )
    }

    pub fn get(&self, locale: Locale) -> Option<&MessageCatalog> {
        self.catalogs.get(&locale)
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Translate `key` for `locale`.
    ///
    /// Falls back to the fallback locale's catalog, then to the key itself.
    /// With non-empty `args`, `{name}` placeholders are substituted; if the
    /// template names a placeholder that `args` lacks, it is returned unformatted.
    pub fn translate(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        let template = match self.get(locale).and_then(|catalog| catalog.get(key)) {
            Some(template) => template,
            None => match self.fallback(key) {
                Some(template) => {
                    if self.options.fallback_warn {
                        warn!(
                            "Message '{}' missing for {}, using {}",
                            key, locale, self.options.fallback_locale
                        );
                    }
                    template
                }
                None => {
                    if self.options.missing_warn {
                        warn!("Message '{}' not found in any catalog", key);
                    }
                    return key.to_string();
                }
            },
        };

        if args.is_empty() {
            return template.to_string();
        }
        format_template(template, args)
    }

    fn fallback(&self, key: &str) -> Option<&'static str> {
        self.get(self.options.fallback_locale)
            .and_then(|catalog| catalog.get(key))
    }
}

/// Substitute `{name}` placeholders, turning `{{` and `}}` into literal braces.
/// Leaves the template untouched when any placeholder has no matching argument.
pub fn format_template(template: &str, args: &[(&str, &str)]) -> String {
    let regex = placeholder_regex();

    let complete = regex
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .all(|name| args.iter().any(|(arg, _)| *arg == name.as_str()));
    if !complete {
        return template.to_string();
    }

    regex
        .replace_all(template, |caps: &regex::Captures| match caps.get(1) {
            Some(name) => args
                .iter()
                .find(|(arg, _)| *arg == name.as_str())
                .map(|(_, value)| value.to_string())
                .unwrap_or_default(),
            None => caps[0][..1].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogs {
        Catalogs::new(
            [
                MessageCatalog::new(Locale::EN_US, &[("greeting", "Hello {name}")]),
                MessageCatalog::new(
                    Locale::ZH_CN,
                    &[("greeting", "你好 {name}"), ("only_zh", "仅中文")],
                ),
            ],
            CatalogOptions::default(),
        )
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_translate_direct_hit() {
        assert_eq!(
            sample().translate(Locale::EN_US, "greeting", &[("name", "Ada")]),
            "Hello Ada"
        );
    }

    #[test]
    fn test_translate_falls_back_to_default_catalog() {
        assert_eq!(sample().translate(Locale::EN_US, "only_zh", &[]), "仅中文");
    }

    #[test]
    fn test_translate_locale_without_catalog_falls_back() {
        assert_eq!(sample().translate(Locale::ZH_TW, "greeting", &[]), "你好 {name}");
    }

    #[test]
    fn test_translate_missing_returns_key() {
        assert_eq!(sample().translate(Locale::EN_US, "nope", &[]), "nope");
    }

    #[test]
    fn test_translate_with_warnings_enabled_still_works() {
        let options = CatalogOptions {
            missing_warn: true,
            fallback_warn: true,
            ..CatalogOptions::default()
        };
        let catalogs = Catalogs::builtin(options);
        assert_eq!(catalogs.translate(Locale::EN_US, "nope", &[]), "nope");
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_format_no_args_keeps_placeholders() {
        assert_eq!(sample().translate(Locale::EN_US, "greeting", &[]), "Hello {name}");
    }

    #[test]
    fn test_format_missing_arg_returns_template() {
        assert_eq!(
            format_template("{task_id}/{filename}", &[("task_id", "t1")]),
            "{task_id}/{filename}"
        );
    }

    #[test]
    fn test_format_extra_args_ignored() {
        assert_eq!(
            format_template("Error: {error}", &[("error", "boom"), ("unused", "x")]),
            "Error: boom"
        );
    }

    #[test]
    fn test_format_doubled_braces_are_literal() {
        assert_eq!(format_template("{{literal}} {a}", &[("a", "1")]), "{literal} 1");
        assert_eq!(format_template("{{{a}}}", &[("a", "x")]), "{x}");
        assert_eq!(format_template(r#"{{"id": {id}}}"#, &[("id", "7")]), r#"{"id": 7}"#);
    }

    #[test]
    fn test_format_escaped_name_needs_no_argument() {
        assert_eq!(format_template("{{error}}: {a}", &[("a", "1")]), "{error}: 1");
    }

    #[test]
    fn test_format_repeated_placeholder() {
        assert_eq!(format_template("{a}-{a}", &[("a", "1")]), "1-1");
    }

    // ==================== Builtin Catalog Tests ====================

    #[test]
    fn test_builtin_catalogs_cover_every_locale() {
        let catalogs = Catalogs::builtin(CatalogOptions::default());
        for locale in crate::i18n::supported_locales() {
            let catalog = catalogs.get(locale).expect("catalog present");
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn test_builtin_catalogs_share_keys() {
        let catalogs = Catalogs::builtin(CatalogOptions::default());
        let reference = catalogs.get(Locale::ZH_CN).expect("default catalog");
        for locale in crate::i18n::supported_locales() {
            let catalog = catalogs.get(locale).expect("catalog present");
            assert_eq!(catalog.len(), reference.len(), "{} key count", locale);
            for key in reference.keys() {
                assert!(catalog.get(key).is_some(), "{} lacks {}", locale, key);
            }
        }
    }

    #[test]
    fn test_builtin_service_healthy() {
        let catalogs = Catalogs::builtin(CatalogOptions::default());
        assert_eq!(
            catalogs.translate(Locale::EN_US, "service_healthy", &[]),
            "Service is running normally"
        );
        assert_eq!(catalogs.translate(Locale::ZH_TW, "service_healthy", &[]), "服務正常運行");
    }

    #[test]
    fn test_builtin_image_not_found_formatting() {
        let catalogs = Catalogs::builtin(CatalogOptions::default());
        let text = catalogs.translate(
            Locale::EN_US,
            "image_not_found",
            &[("task_id", "abc"), ("filename", "1.png")],
        );
        assert_eq!(text, "Image not found: abc/1.png");
    }
}
