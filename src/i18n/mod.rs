//! Internationalization (i18n) module.
//!
//! Everything locale-related lives here: the supported-locale registry, the
//! startup resolution policy, the persisted preference, the active-locale cell
//! and the message catalogs.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their labels
//! - `locale`: Validated `Locale` type
//! - `resolver`: Startup resolution and `Accept-Language` negotiation
//! - `store`: Durable storage for the preference
//! - `state`: Active-locale cell with change notification
//! - `catalog` / `messages`: Key → template catalogs with fallback
//! - `context`: The `I18n` subsystem tying them together
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use redink_locale::i18n::{CatalogOptions, ContentLanguage, I18n, MemoryLocaleStore, SystemLanguage};
//!
//! let i18n = I18n::init(
//!     Arc::new(MemoryLocaleStore::new()),
//!     &SystemLanguage,
//!     Arc::new(ContentLanguage::new()),
//!     CatalogOptions::default(),
//! );
//! i18n.set_locale("en-US")?;
//! assert_eq!(i18n.current_locale().code(), "en-US");
//! ```

mod catalog;
mod context;
mod locale;
pub mod messages;
mod registry;
mod resolver;
mod state;
mod store;

pub use catalog::{format_template, CatalogOptions, Catalogs, MessageCatalog};
pub use context::I18n;
pub use locale::{locale_names, supported_locales, Locale};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{
    detect_locale, initial_locale, match_locale, negotiate, to_fs_locale, FixedLanguage,
    PlatformLanguage, SystemLanguage, DEFAULT_PLATFORM_TAG,
};
pub use state::{ContentLanguage, DocumentLanguage, LocaleState};
pub use store::{FileLocaleStore, LocaleStore, MemoryLocaleStore, LOCALE_STORAGE_KEY};
