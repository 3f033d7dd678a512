// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::CardId;
use crate::types::preferences::Mode;
use crate::types::preferences::Theme;

pub const THEME_KEY: &str = "flashcardTheme";
pub const MODE_KEY: &str = "flashcardMode";

/// The key holding the learned card ids of one set.
pub fn learned_key(set_id: &str) -> String {
    format!("learnedCards_{set_id}")
}

/// String key-value storage that outlives the page.
pub trait Storage {
    fn get(&self, key: &str) -> Fallible<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Fallible<()>;
}

/// Storage held in memory. Writes can be made to fail, to exercise the
/// paths where the browser refuses them.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        if self.read_only {
            return fail(format!("storage is read-only, cannot write {key}."));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the learned ids persisted for a set. Missing or unreadable values
/// yield an empty list.
pub fn load_learned<S: Storage>(storage: &S, set_id: &str) -> Vec<CardId> {
    let key = learned_key(set_id);
    let json = match storage.get(&key) {
        Ok(Some(json)) => json,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read {key}: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<CardId>>(&json) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("Ignoring malformed {key}: {e}");
            Vec::new()
        }
    }
}

pub fn save_learned<S: Storage>(
    storage: &mut S,
    set_id: &str,
    learned: &BTreeSet<CardId>,
) -> Fallible<()> {
    let json = serde_json::to_string(learned)?;
    storage.set(&learned_key(set_id), &json)
}

pub fn load_theme<S: Storage>(storage: &S) -> Theme {
    match storage.get(THEME_KEY) {
        Ok(Some(name)) => Theme::try_from(name.as_str()).unwrap_or_else(|e| {
            log::warn!("Ignoring stored theme: {e}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            log::warn!("Failed to read {THEME_KEY}: {e}");
            Theme::default()
        }
    }
}

pub fn load_mode<S: Storage>(storage: &S) -> Mode {
    match storage.get(MODE_KEY) {
        Ok(Some(name)) => Mode::try_from(name.as_str()).unwrap_or_else(|e| {
            log::warn!("Ignoring stored mode: {e}");
            Mode::default()
        }),
        Ok(None) => Mode::default(),
        Err(e) => {
            log::warn!("Failed to read {MODE_KEY}: {e}");
            Mode::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learned_key() {
        assert_eq!(learned_key("1"), "learnedCards_1");
    }

    #[test]
    fn test_learned_roundtrip() -> Fallible<()> {
        let mut storage = MemoryStorage::new();
        let learned: BTreeSet<CardId> = [CardId::new("1", 2), CardId::new("1", 0)].into();
        save_learned(&mut storage, "1", &learned)?;
        assert_eq!(
            storage.get("learnedCards_1")?,
            Some(r#"["1-0","1-2"]"#.to_string())
        );
        assert_eq!(
            load_learned(&storage, "1"),
            vec![CardId::new("1", 0), CardId::new("1", 2)]
        );
        assert!(load_learned(&storage, "2").is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_learned() -> Fallible<()> {
        let mut storage = MemoryStorage::new();
        storage.set("learnedCards_1", "{not json")?;
        assert!(load_learned(&storage, "1").is_empty());
        Ok(())
    }

    #[test]
    fn test_read_only_storage() {
        let mut storage = MemoryStorage::new();
        storage.set_read_only(true);
        let result = save_learned(&mut storage, "1", &BTreeSet::new());
        assert!(result.is_err());
        assert_eq!(storage.get("learnedCards_1"), Ok(None));
    }

    #[test]
    fn test_preferences_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_theme(&storage), Theme::Default);
        assert_eq!(load_mode(&storage), Mode::Light);
    }

    #[test]
    fn test_preferences_stored() -> Fallible<()> {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "forest")?;
        storage.set(MODE_KEY, "dark")?;
        assert_eq!(load_theme(&storage), Theme::Forest);
        assert_eq!(load_mode(&storage), Mode::Dark);
        Ok(())
    }

    #[test]
    fn test_unknown_preferences() -> Fallible<()> {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "neon")?;
        storage.set(MODE_KEY, "dim")?;
        assert_eq!(load_theme(&storage), Theme::Default);
        assert_eq!(load_mode(&storage), Mode::Light);
        Ok(())
    }
}
