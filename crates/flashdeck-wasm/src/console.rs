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

use std::str::FromStr;

use flashdeck_core::query::query_param;
use log::Level;
use log::LevelFilter;

/// Sends `log` records to the browser console, unless the page asked for
/// `?log=off`.
pub fn init(query: &str) {
    match level_from_query(query) {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(LevelFilter::Off),
    }
}

/// The level requested by the page's `log` query parameter, `info` when
/// absent or unrecognized. `off` disables logging.
pub fn level_from_query(query: &str) -> Option<Level> {
    match query_param(query, "log").and_then(|level| LevelFilter::from_str(&level).ok()) {
        Some(filter) => filter.to_level(),
        None => Some(Level::Info),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_query() {
        assert_eq!(level_from_query(""), Some(Level::Info));
        assert_eq!(level_from_query("?set=2&log=debug"), Some(Level::Debug));
        assert_eq!(level_from_query("?log=WARN"), Some(Level::Warn));
        assert_eq!(level_from_query("?log=off"), None);
        assert_eq!(level_from_query("?log=loud"), Some(Level::Info));
    }
}
