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

use crate::collection::Collection;
use crate::error::Fallible;

pub fn export_sets(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let json: String = coll.table.to_json_pretty()?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use flashdeck_core::types::set_table::SetTable;

    use super::*;

    #[test]
    fn test_non_existent_directory() {
        assert!(export_sets(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_export() -> Fallible<()> {
        export_sets(Some("./test".to_string()))?;
        Ok(())
    }

    #[test]
    fn test_export_is_read_back_by_the_browser() -> Fallible<()> {
        let coll = Collection::new(Some("./test".to_string()))?;
        let json = coll.table.to_json_pretty()?;
        let table = SetTable::from_json(&json)?;
        assert_eq!(table, coll.table);
        Ok(())
    }
}
