//! Durable storage for the locale preference.
//!
//! The preference is a single string entry under [`LOCALE_STORAGE_KEY`].
//! Stores hand back whatever they hold; validation against the supported set
//! happens in the resolver.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;

/// Key under which the locale preference is persisted.
pub const LOCALE_STORAGE_KEY: &str = "redink-locale";

/// Key-value storage that survives restarts.
pub trait LocaleStore: Send + Sync {
    /// The stored preference, or `None` when absent or unreadable.
    fn load(&self) -> Option<String>;

    /// Persist a preference, replacing any previous value.
    fn save(&self, locale: &str) -> Result<()>;
}

/// JSON file store, e.g. `~/.local/share/redink/preferences.json`.
///
/// The file holds a JSON object; other preferences written next to the locale,
/// whatever their value type, survive a save.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Option<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!("Ignoring malformed preferences in {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Option<String> {
        match self.read_entries()?.remove(LOCALE_STORAGE_KEY)? {
            Value::String(locale) => Some(locale),
            other => {
                warn!("Ignoring non-string locale preference: {}", other);
                None
            }
        }
    }

    fn save(&self, locale: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(
            LOCALE_STORAGE_KEY.to_string(),
            Value::String(locale.to_string()),
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content)?;
        debug!("Saved locale preference to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under the locale key.
    pub fn with_value(value: &str) -> Self {
        let store = Self::new();
        store.insert(LOCALE_STORAGE_KEY, value);
        store
    }

    /// Raw access to any key, mirroring what a browser storage would expose.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Option<String> {
        self.get(LOCALE_STORAGE_KEY)
    }

    fn save(&self, locale: &str) -> Result<()> {
        self.insert(LOCALE_STORAGE_KEY, locale);
        Ok(())
    }
}
