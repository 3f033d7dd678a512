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

use flashdeck_core::error::ErrorReport;
use flashdeck_core::error::Fallible;
use flashdeck_core::storage::Storage;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// The browser's `localStorage`. Some browsers refuse access (private
/// windows, disabled cookies); every operation then fails.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        let inner = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage is unavailable; progress will not be saved.");
                None
            }
            Err(e) => {
                log::warn!("localStorage is inaccessible: {}", js_message(&e));
                None
            }
        };
        Self { inner }
    }

    fn storage(&self) -> Fallible<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| ErrorReport::new("localStorage is unavailable."))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ErrorReport::new(format!("cannot read {key}: {}", js_message(&e))))
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ErrorReport::new(format!("cannot write {key}: {}", js_message(&e))))
    }
}

/// Best-effort text for a thrown JavaScript value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
