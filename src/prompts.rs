//! Per-locale prompt templates.
//!
//! Templates live under `{root}/{fs_locale}/{name}` (for example
//! `prompts/en_US/outline_prompt.txt`). A template missing for the requested
//! locale is served from the default locale's directory instead.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

use crate::error::{I18nError, Result};
use crate::i18n::Locale;

const CACHE_CAPACITY: usize = 128;

/// Loader with an LRU cache keyed by `(name, locale)`.
pub struct PromptTemplates {
    root: PathBuf,
    cache: Mutex<LruCache<(String, Locale), String>>,
}

impl PromptTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            root: root.into(),
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load `name` for `locale`, falling back to the default locale.
    pub fn load(&self, name: &str, locale: Locale) -> Result<String> {
        let key = (name.to_string(), locale);
        if let Some(cached) = self.lock().get(&key) {
            return Ok(cached.clone());
        }

        let not_found = || I18nError::TemplateNotFound {
            name: name.to_string(),
            locale: locale.to_string(),
        };

        if !is_plain_file_name(name) {
            return Err(not_found());
        }

        let primary = self.root.join(locale.fs_code()).join(name);
        let fallback = self.root.join(Locale::default_locale().fs_code()).join(name);

        let path = if primary.is_file() {
            primary
        } else if fallback.is_file() {
            debug!("Prompt {} missing for {}, using default locale", name, locale);
            fallback
        } else {
            return Err(not_found());
        };

        let content = fs::read_to_string(&path)?;
        self.lock().put(key, content.clone());
        Ok(content)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<(String, Locale), String>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
