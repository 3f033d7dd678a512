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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Next,
    Prev,
    Flip,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.key` value to its shortcut.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Shortcut::Next),
            "ArrowLeft" => Some(Shortcut::Prev),
            " " | "Enter" => Some(Shortcut::Flip),
            _ => None,
        }
    }

    /// Whether the key's default page action (scrolling, submitting) must be
    /// suppressed.
    pub fn prevents_default(&self) -> bool {
        *self == Shortcut::Flip
    }
}
