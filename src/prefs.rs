use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::errors::BotError;
use crate::i18n::Lang;

/// Per-user language preference storage. Swappable so the state machine can
/// be tested without filesystem I/O.
pub trait LangStore: Send + Sync {
    fn get(&self, user_id: u64) -> Option<Lang>;
    fn set(&self, user_id: u64, lang: Lang) -> Result<(), BotError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefRecord {
    lang: String,
}

/// Flat JSON file mapping user id to `{ "lang": "<tag>" }`. A missing or
/// malformed file is an empty store, never a fatal error. The whole store is
/// written back on every change; the mutex serializes writers so an update
/// for one user cannot drop another user's entry.
pub struct FileLangStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, PrefRecord>>,
}

impl FileLangStore {
    pub fn load(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }
}

impl LangStore for FileLangStore {
    fn get(&self, user_id: u64) -> Option<Lang> {
        let entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries
            .get(&user_id.to_string())
            .and_then(|record| Lang::parse(&record.lang))
    }

    fn set(&self, user_id: u64, lang: Lang) -> Result<(), BotError> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(
            user_id.to_string(),
            PrefRecord {
                lang: lang.as_str().to_string(),
            },
        );
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&*entries)?)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryLangStore {
    entries: Mutex<HashMap<u64, Lang>>,
}

impl LangStore for MemoryLangStore {
    fn get(&self, user_id: u64) -> Option<Lang> {
        let entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.get(&user_id).copied()
    }

    fn set(&self, user_id: u64, lang: Lang) -> Result<(), BotError> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(user_id, lang);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLangStore::load(dir.path().join("missing.json"));
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn malformed_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();
        let store = FileLangStore::load(path);
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn set_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileLangStore::load(path.clone());
        store.set(42, Lang::Ru).unwrap();

        let reloaded = FileLangStore::load(path);
        assert_eq!(reloaded.get(42), Some(Lang::Ru));
        assert_eq!(reloaded.get(7), None);
    }

    #[test]
    fn set_for_one_user_keeps_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileLangStore::load(path.clone());
        store.set(1, Lang::Ru).unwrap();
        store.set(2, Lang::En).unwrap();

        let reloaded = FileLangStore::load(path);
        assert_eq!(reloaded.get(1), Some(Lang::Ru));
        assert_eq!(reloaded.get(2), Some(Lang::En));
    }

    #[test]
    fn unknown_tag_in_store_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"5":{"lang":"de"}}"#).unwrap();
        let store = FileLangStore::load(path);
        assert_eq!(store.get(5), None);
    }
}
