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

//! Fixed display strings. The widget ships in Bengali.

pub const LEARNED: &str = "✅ শেখা হয়েছে";
pub const MARK_LEARNED: &str = "শিখেছি";
pub const FAILURE_HEADING: &str = "দুঃখিত!";

pub fn set_option(set_id: &str) -> String {
    format!("সেট {set_id}")
}

pub fn set_not_found(set_id: &str) -> String {
    format!("সেট '{set_id}' পাওয়া যায়নি।")
}

/// The counter shown under the card, e.g. `2 / 10`.
pub fn counter(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}
