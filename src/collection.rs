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

use std::collections::BTreeMap;
use std::env::current_dir;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use flashdeck_core::types::card::RawCard;
use flashdeck_core::types::set_table::SetTable;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// A directory of set files, loaded into the table the browser studies
/// from.
pub struct Collection {
    pub directory: PathBuf,
    pub table: SetTable,
}

/// The contents of one set file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SetFile {
    #[serde(default)]
    cards: Vec<RawCard>,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let table = {
            log::debug!("Loading sets...");
            let start = Instant::now();
            let table = load_sets(&directory)?;
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!("Loaded {} sets in {duration}ms.", table.len());
            table
        };

        Ok(Self { directory, table })
    }
}

/// Every `*.toml` file below `directory` is a set, named by its file stem.
fn load_sets(directory: &Path) -> Fallible<SetTable> {
    let mut table = SetTable::new();
    let mut origins: BTreeMap<String, PathBuf> = BTreeMap::new();
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !(path.is_file() && path.extension().is_some_and(|ext| ext == "toml")) {
            continue;
        }
        let set_id: String = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ErrorReport::new(format!("invalid set file name: {}", path.display())))?
            .to_string();
        if let Some(first) = origins.get(&set_id) {
            return fail(format!(
                "set '{set_id}' is defined twice: {} and {}",
                first.display(),
                path.display()
            ));
        }
        let contents = read_to_string(path)?;
        let file: SetFile = toml::from_str(&contents)
            .map_err(|e| ErrorReport::new(format!("{}: {e}", path.display())))?;
        log::debug!("Set '{set_id}' has {} cards.", file.cards.len());
        table.insert(set_id.clone(), file.cards);
        origins.insert(set_id, path.to_path_buf());
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir;
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert!(result.is_err());
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: directory does not exist.".to_string())
        );
    }

    #[test]
    fn test_test_directory() -> Fallible<()> {
        let coll = Collection::new(Some("./test".to_string()))?;
        assert_eq!(coll.table.set_ids(), vec!["1", "2"]);
        let first = coll.table.get("1").map(|cards| cards.len());
        assert_eq!(first, Some(3));
        Ok(())
    }

    #[test]
    fn test_nested_files_and_optional_explanation() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let nested = dir.join("grammar");
        create_dir(&nested)?;
        write(
            nested.join("verbs.toml"),
            "[[cards]]\nquestion = \"Q\"\nanswer = \"A\"\nexplanation = \"E\"\n\n[[cards]]\nquestion = \"Q2\"\nanswer = \"A2\"\n",
        )?;
        write(dir.join("notes.txt"), "not a set")?;
        let coll = Collection::new(Some(dir.display().to_string()))?;
        assert_eq!(coll.table.set_ids(), vec!["verbs"]);
        let cards = coll.table.get("verbs").unwrap_or_default();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].explanation.as_deref(), Some("E"));
        assert_eq!(cards[1].explanation, None);
        Ok(())
    }

    #[test]
    fn test_file_without_cards_is_an_empty_set() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("empty.toml"), "")?;
        let coll = Collection::new(Some(dir.display().to_string()))?;
        assert_eq!(coll.table.get("empty").map(|cards| cards.len()), Some(0));
        Ok(())
    }

    #[test]
    fn test_duplicate_set_ids() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        create_dir(dir.join("a"))?;
        create_dir(dir.join("b"))?;
        write(dir.join("a").join("1.toml"), "")?;
        write(dir.join("b").join("1.toml"), "")?;
        let result = Collection::new(Some(dir.display().to_string()));
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.starts_with("error: set '1' is defined twice"));
        Ok(())
    }

    #[test]
    fn test_malformed_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("bad.toml"), "[[cards]]\nquestion = \"no answer\"\n")?;
        let result = Collection::new(Some(dir.display().to_string()));
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("bad.toml"));
        Ok(())
    }
}
