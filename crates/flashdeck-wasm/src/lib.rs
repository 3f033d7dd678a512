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

//! Runs the flashdeck study widget in a browser page.
//!
//! The page supplies the card sets as `window.allFlashcardSets` and the
//! selected set through `?set=<id>`.

mod console;
mod dom;
mod events;
mod local_storage;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use flashdeck_core::controller::Boot;
use flashdeck_core::controller::Controller;
use flashdeck_core::types::set_table::SetTable;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::dom::DomView;
use crate::local_storage::LocalStorage;
use crate::local_storage::js_message;
use crate::timer::RenderSink;
use crate::timer::TimeoutScheduler;

/// The name of the global the hosting page assigns the set table to.
const SETS_GLOBAL: &str = "allFlashcardSets";

type App = Controller<DomView, LocalStorage, TimeoutScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let query = window.location().search()?;
    console::init(&query);

    let table = read_table();
    let view = DomView::new(&window, &document)?;
    let storage = LocalStorage::new(&window);
    let sink = RenderSink::default();
    let scheduler = TimeoutScheduler::new(window.clone(), sink.clone());
    let boot = Boot {
        query: &query,
        table: table.as_ref(),
        seed: seed(),
    };

    let controller = match Controller::start(boot, view, storage, scheduler) {
        Ok(controller) => controller,
        Err(e) => {
            // The failure message is already on the page.
            log::warn!("Session not started: {e}");
            return Ok(());
        }
    };
    let app = Rc::new(RefCell::new(controller));

    let weak = Rc::downgrade(&app);
    sink.connect(move |ticket| {
        if let Some(app) = weak.upgrade() {
            app.borrow_mut().complete_render(ticket);
        }
    });

    events::attach(&document, &app)?;
    log::debug!("Flashdeck started.");
    Ok(())
}

/// Reads the set table from the page. A missing or malformed table reads as
/// absent.
fn read_table() -> Option<SetTable> {
    let value = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(SETS_GLOBAL)) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Cannot read {SETS_GLOBAL}: {}", js_message(&e));
            return None;
        }
    };
    if value.is_undefined() || value.is_null() {
        log::error!("The page defines no {SETS_GLOBAL}.");
        return None;
    }
    let json = match js_sys::JSON::stringify(&value) {
        Ok(json) => String::from(json),
        Err(e) => {
            log::error!("Cannot serialize {SETS_GLOBAL}: {}", js_message(&e));
            return None;
        }
    };
    match SetTable::from_json(&json) {
        Ok(table) => Some(table),
        Err(e) => {
            log::error!("Malformed {SETS_GLOBAL}: {e}");
            None
        }
    }
}

fn seed() -> u64 {
    let random = (js_sys::Math::random() * u64::MAX as f64) as u64;
    random ^ js_sys::Date::now() as u64
}
