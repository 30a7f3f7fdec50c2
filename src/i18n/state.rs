//! Active locale cell and document language metadata.

use std::sync::RwLock;

use tokio::sync::watch;

use crate::i18n::Locale;

/// The process-wide active locale.
///
/// Backed by a `watch` channel: reads never block and every subscriber sees
/// each change. Only [`crate::i18n::I18n::set_locale`] writes to it.
#[derive(Debug)]
pub struct LocaleState {
    tx: watch::Sender<Locale>,
}

impl LocaleState {
    pub fn new(initial: Locale) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Locale {
        *self.tx.borrow()
    }

    /// Receiver notified whenever the active locale changes.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.tx.subscribe()
    }

    /// Replace the active locale. Returns `true` if the value changed;
    /// subscribers are only notified in that case.
    pub(crate) fn replace(&self, locale: Locale) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == locale {
                return false;
            }
            *current = locale;
            true
        })
    }
}

/// Write-only sink for the document-level language attribute.
pub trait DocumentLanguage: Send + Sync {
    fn set_lang(&self, tag: &str);
}

/// Holds the document language so HTTP responses can advertise it as
/// `Content-Language`. Unset until the first successful locale switch.
#[derive(Debug, Default)]
pub struct ContentLanguage {
    lang: RwLock<Option<String>>,
}

impl ContentLanguage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.lang.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DocumentLanguage for ContentLanguage {
    fn set_lang(&self, tag: &str) {
        *self.lang.write().unwrap_or_else(|e| e.into_inner()) = Some(tag.to_string());
    }
}
