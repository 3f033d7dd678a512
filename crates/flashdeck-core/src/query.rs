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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;

/// The set shown when the page URL does not name one.
pub const DEFAULT_SET_ID: &str = "1";

const SET_PARAM: &str = "set";

/// Unreserved characters pass through unescaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Returns the first value of `name` in a URL query string. The leading
/// `?` is optional.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// The set identifier selected by the page URL. An absent or empty `set`
/// parameter selects [`DEFAULT_SET_ID`].
pub fn selected_set_id(query: &str) -> String {
    match query_param(query, SET_PARAM) {
        Some(set_id) if !set_id.is_empty() => set_id,
        _ => DEFAULT_SET_ID.to_string(),
    }
}

/// The relative URL that reloads the page on another set.
pub fn set_query(set_id: &str) -> String {
    format!("?{SET_PARAM}={}", utf8_percent_encode(set_id, QUERY_VALUE))
}

fn decode(component: &str) -> String {
    let component = component.replace('+', " ");
    percent_decode_str(&component)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        assert_eq!(selected_set_id(""), "1");
        assert_eq!(selected_set_id("?"), "1");
        assert_eq!(selected_set_id("?other=2"), "1");
        assert_eq!(selected_set_id("?set="), "1");
    }

    #[test]
    fn test_selected_set() {
        assert_eq!(selected_set_id("?set=2"), "2");
        assert_eq!(selected_set_id("set=7"), "7");
        assert_eq!(selected_set_id("?a=b&set=3&set=4"), "3");
    }

    #[test]
    fn test_decoding() {
        assert_eq!(selected_set_id("?set=world%20history"), "world history");
        assert_eq!(selected_set_id("?set=world+history"), "world history");
        assert_eq!(
            selected_set_id("?set=%E0%A6%B8%E0%A7%87%E0%A6%9F"),
            "সেট"
        );
    }

    #[test]
    fn test_param_without_value() {
        assert_eq!(query_param("?flag&set=2", "flag"), Some(String::new()));
        assert_eq!(query_param("?flag&set=2", "missing"), None);
    }

    #[test]
    fn test_set_query() {
        assert_eq!(set_query("2"), "?set=2");
        assert_eq!(set_query("a b&c"), "?set=a%20b%26c");
        assert_eq!(selected_set_id(&set_query("a b&c")), "a b&c");
    }
}
