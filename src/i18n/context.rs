//! The localization subsystem handed to the rest of the application.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::i18n::{
    initial_locale, CatalogOptions, Catalogs, DocumentLanguage, Locale, LocaleState, LocaleStore,
    PlatformLanguage,
};

/// Active locale, its persistence, and the message catalogs.
///
/// Built once at startup by [`I18n::init`] and shared by reference (axum
/// state holds an `Arc<I18n>`).
pub struct I18n {
    state: LocaleState,
    catalogs: Catalogs,
    store: Arc<dyn LocaleStore>,
    document: Arc<dyn DocumentLanguage>,
    /// Held across the whole switch so that memory, storage and the document
    /// language always end up naming the same locale.
    write_lock: Mutex<()>,
}

impl I18n {
    /// Resolve the initial locale and assemble the subsystem.
    ///
    /// Resolution order: stored preference, platform language (exact, then
    /// prefix), then the default locale. Nothing is written during init.
    pub fn init(
        store: Arc<dyn LocaleStore>,
        platform: &dyn PlatformLanguage,
        document: Arc<dyn DocumentLanguage>,
        options: CatalogOptions,
    ) -> Self {
        let locale = initial_locale(store.as_ref(), platform);
        info!("Initial locale: {}", locale);

        Self {
            state: LocaleState::new(locale),
            catalogs: Catalogs::builtin(options),
            store,
            document,
            write_lock: Mutex::new(()),
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.state.current()
    }

    /// Receiver notified on every locale switch.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.state.subscribe()
    }

    /// Switch the active locale.
    ///
    /// An unsupported candidate is logged and rejected with no state change and
    /// no storage write. A supported one updates the active locale, is persisted,
    /// and becomes the document language. A failed storage write is logged and
    /// does not roll back the switch.
    pub fn set_locale(&self, candidate: &str) -> Result<Locale> {
        let locale = Locale::from_code(candidate).inspect_err(|_| {
            error!("Unsupported locale: {}", candidate);
        })?;

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.state.replace(locale);
        if let Err(e) = self.store.save(locale.code()) {
            warn!("Failed to persist locale preference {}: {}", locale, e);
        }
        self.document.set_lang(locale.code());

        info!("Locale switched to {}", locale);
        Ok(locale)
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Translate with the active locale.
    pub fn t(&self, key: &str) -> String {
        self.t_args(key, &[])
    }

    /// Translate with the active locale, substituting `{name}` placeholders.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.catalogs.translate(self.current_locale(), key, args)
    }

    /// Translate for an explicit locale, e.g. one negotiated per request.
    pub fn t_in(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        self.catalogs.translate(locale, key, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;
    use crate::i18n::{ContentLanguage, FixedLanguage, MemoryLocaleStore, LOCALE_STORAGE_KEY};
    use proptest::prelude::*;

    struct Fixture {
        i18n: I18n,
        store: Arc<MemoryLocaleStore>,
        document: Arc<ContentLanguage>,
    }

    fn fixture(saved: Option<&str>, platform: &str) -> Fixture {
        let store = Arc::new(match saved {
            Some(value) => MemoryLocaleStore::with_value(value),
            None => MemoryLocaleStore::new(),
        });
        let document = Arc::new(ContentLanguage::new());
        let i18n = I18n::init(
            store.clone(),
            &FixedLanguage::tag(platform),
            document.clone(),
            CatalogOptions::default(),
        );
        Fixture { i18n, store, document }
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl LocaleStore for ReadOnlyStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _locale: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    // ==================== Init Tests ====================

    #[test]
    fn test_init_does_not_write_storage() {
        let f = fixture(None, "en-GB");
        assert_eq!(f.i18n.current_locale(), Locale::EN_US);
        assert_eq!(f.store.get(LOCALE_STORAGE_KEY), None);
        assert_eq!(f.document.get(), None);
    }

    #[test]
    fn test_init_uses_saved_preference() {
        let f = fixture(Some("zh-TW"), "en-US");
        assert_eq!(f.i18n.current_locale(), Locale::ZH_TW);
    }

    #[test]
    fn test_init_unmatched_platform_uses_default() {
        let f = fixture(None, "de-DE");
        assert_eq!(f.i18n.current_locale(), Locale::ZH_CN);
    }

    // ==================== set_locale Tests ====================

    #[test]
    fn test_set_locale_valid() {
        let f = fixture(None, "zh-TW");
        let locale = f.i18n.set_locale("en-US").expect("Should switch");

        assert_eq!(locale, Locale::EN_US);
        assert_eq!(f.i18n.current_locale(), Locale::EN_US);
        assert_eq!(f.store.get(LOCALE_STORAGE_KEY), Some("en-US".to_string()));
        assert_eq!(f.document.get(), Some("en-US".to_string()));
    }

    #[test]
    fn test_set_locale_invalid_is_noop() {
        let f = fixture(None, "zh-TW");
        let result = f.i18n.set_locale("fr-FR");

        assert!(matches!(result, Err(I18nError::UnsupportedLocale(_))));
        assert_eq!(f.i18n.current_locale(), Locale::ZH_TW);
        assert_eq!(f.store.get(LOCALE_STORAGE_KEY), None);
        assert_eq!(f.document.get(), None);
    }

    #[test]
    fn test_set_locale_notifies_subscribers() {
        let f = fixture(None, "zh-CN");
        let mut rx = f.i18n.subscribe();

        f.i18n.set_locale("zh-TW").expect("Should switch");

        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), Locale::ZH_TW);
    }

    #[test]
    fn test_set_locale_survives_storage_failure() {
        let document = Arc::new(ContentLanguage::new());
        let i18n = I18n::init(
            Arc::new(ReadOnlyStore),
            &FixedLanguage::unavailable(),
            document.clone(),
            CatalogOptions::default(),
        );

        i18n.set_locale("en-US").expect("Should switch");
        assert_eq!(i18n.current_locale(), Locale::EN_US);
        assert_eq!(document.get(), Some("en-US".to_string()));
    }

    #[test]
    fn test_concurrent_switches_leave_consistent_state() {
        use std::thread;
        use std::time::Duration;

        /// Memory store whose English writes are slow.
        struct SlowStore(MemoryLocaleStore);

        impl LocaleStore for SlowStore {
            fn load(&self) -> Option<String> {
                self.0.load()
            }

            fn save(&self, locale: &str) -> Result<()> {
                if locale == "en-US" {
                    thread::sleep(Duration::from_millis(200));
                }
                self.0.save(locale)
            }
        }

        let store = Arc::new(SlowStore(MemoryLocaleStore::new()));
        let document = Arc::new(ContentLanguage::new());
        let i18n = Arc::new(I18n::init(
            store.clone(),
            &FixedLanguage::tag("zh-CN"),
            document.clone(),
            CatalogOptions::default(),
        ));

        let slow = {
            let i18n = Arc::clone(&i18n);
            thread::spawn(move || i18n.set_locale("en-US"))
        };
        thread::sleep(Duration::from_millis(50));
        let fast = {
            let i18n = Arc::clone(&i18n);
            thread::spawn(move || i18n.set_locale("zh-TW"))
        };
        slow.join().expect("thread").expect("Should switch");
        fast.join().expect("thread").expect("Should switch");

        let current = i18n.current_locale().code().to_string();
        assert_eq!(store.0.get(LOCALE_STORAGE_KEY), Some(current.clone()));
        assert_eq!(document.get(), Some(current));
    }

    // ==================== Translation Tests ====================

    #[test]
    fn test_t_follows_active_locale() {
        let f = fixture(None, "zh-CN");
        assert_eq!(f.i18n.t("config_saved"), "配置已保存");

        f.i18n.set_locale("en-US").expect("Should switch");
        assert_eq!(f.i18n.t("config_saved"), "Configuration saved");
    }

    #[test]
    fn test_t_args() {
        let f = fixture(Some("en-US"), "zh-CN");
        assert_eq!(
            f.i18n.t_args("get_config_failed", &[("error", "disk full")]),
            "Failed to get configuration: disk full"
        );
    }

    #[test]
    fn test_t_in_ignores_active_locale() {
        let f = fixture(Some("en-US"), "en-US");
        assert_eq!(f.i18n.t_in(Locale::ZH_TW, "config_saved", &[]), "配置已保存");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_valid_set_then_get(idx in 0usize..3) {
            let target = [Locale::EN_US, Locale::ZH_CN, Locale::ZH_TW][idx];
            let f = fixture(None, "zh-TW");
            f.i18n.set_locale(target.code()).expect("supported");
            prop_assert_eq!(f.i18n.current_locale(), target);
        }

        #[test]
        fn prop_invalid_set_is_noop(candidate in "\\PC{0,12}") {
            prop_assume!(!crate::i18n::LocaleRegistry::get().is_supported(&candidate));
            let f = fixture(None, "zh-TW");
            prop_assert!(f.i18n.set_locale(&candidate).is_err());
            prop_assert_eq!(f.i18n.current_locale(), Locale::ZH_TW);
            prop_assert_eq!(f.store.get(LOCALE_STORAGE_KEY), None);
        }
    }
}
