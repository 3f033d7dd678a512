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

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::RawCard;

/// Maps set identifiers to their ordered card records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SetTable {
    sets: BTreeMap<String, Vec<RawCard>>,
}

impl SetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a table the way the page displays it: the top level must be an
    /// object, but card fields are taken as they come. Non-string values
    /// show as their JSON text, and a missing or null question or answer
    /// shows as nothing. A set that isn't a list is skipped, leaving the
    /// other sets usable.
    pub fn from_json(json: &str) -> Fallible<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = value else {
            return fail("the set table is not a JSON object.");
        };
        let mut table = Self::new();
        for (set_id, records) in entries {
            match records {
                Value::Array(records) => {
                    let cards = records.iter().map(record_to_card).collect();
                    table.insert(set_id, cards);
                }
                other => log::warn!("Skipping set '{set_id}': not a list of cards ({other})."),
            }
        }
        Ok(table)
    }

    pub fn to_json(&self) -> Fallible<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Fallible<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Inserts a set, returning the cards previously stored under the same
    /// identifier.
    pub fn insert(&mut self, set_id: impl Into<String>, cards: Vec<RawCard>) -> Option<Vec<RawCard>> {
        self.sets.insert(set_id.into(), cards)
    }

    pub fn get(&self, set_id: &str) -> Option<&[RawCard]> {
        self.sets.get(set_id).map(Vec::as_slice)
    }

    pub fn contains(&self, set_id: &str) -> bool {
        self.sets.contains_key(set_id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The set identifiers in display order.
    pub fn set_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        ids.sort_by(|a, b| compare_set_ids(a, b));
        ids
    }

    /// The sets in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawCard])> {
        self.set_ids()
            .into_iter()
            .filter_map(|id| self.get(id).map(|cards| (id, cards)))
    }
}

fn record_to_card(record: &Value) -> RawCard {
    RawCard {
        question: field_text(record, "question").unwrap_or_default(),
        answer: field_text(record, "answer").unwrap_or_default(),
        explanation: field_text(record, "explanation"),
    }
}

fn field_text(record: &Value, name: &str) -> Option<String> {
    match record.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Integer identifiers sort numerically and come before all others, which
/// sort lexicographically.
fn compare_set_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
