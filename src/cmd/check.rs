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

use flashdeck_core::types::set_table::SetTable;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;

pub fn check_sets(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    if coll.table.is_empty() {
        return fail("no sets found.");
    }
    for line in summarize(&coll.table) {
        println!("{line}");
    }
    println!("ok");
    Ok(())
}

/// One line per set, in the order the set selector lists them.
fn summarize(table: &SetTable) -> Vec<String> {
    table
        .set_ids()
        .into_iter()
        .map(|set_id| {
            let count = table.get(set_id).map_or(0, |cards| cards.len());
            let noun = if count == 1 { "card" } else { "cards" };
            format!("{set_id}: {count} {noun}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_non_existent_directory() {
        assert!(check_sets(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_directory() {
        assert!(check_sets(Some("./test".to_string())).is_ok());
    }

    #[test]
    fn test_directory_without_sets() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let result = check_sets(Some(dir.display().to_string()));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: no sets found.".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_summarize() -> Fallible<()> {
        let coll = Collection::new(Some("./test".to_string()))?;
        assert_eq!(summarize(&coll.table), vec!["1: 3 cards", "2: 2 cards"]);
        Ok(())
    }
}
