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

use std::cell::RefCell;
use std::rc::Rc;

use flashdeck_core::surface;
use flashdeck_core::types::preferences::Mode;
use flashdeck_core::types::preferences::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Document;
use web_sys::Event;
use web_sys::EventTarget;
use web_sys::HtmlElement;
use web_sys::HtmlInputElement;
use web_sys::HtmlSelectElement;
use web_sys::KeyboardEvent;
use web_sys::Node;

use crate::App;
use crate::dom::by_id;

/// Wires the page's controls to the controller. The listeners live as long
/// as the page.
pub fn attach(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let selector: HtmlSelectElement = by_id(document, surface::SET_SELECTOR_ID)?;
    let toggle: HtmlInputElement = by_id(document, surface::DARK_MODE_TOGGLE_ID)?;

    {
        let app = app.clone();
        let selector_for_change = selector.clone();
        listen(&selector, "change", move |_| {
            app.borrow_mut().change_set(&selector_for_change.value());
        })?;
    }
    {
        let app = app.clone();
        on_click(document, surface::FLASHCARD_ID, move || app.borrow_mut().flip())?;
    }
    {
        let app = app.clone();
        on_click(document, surface::NEXT_BUTTON_ID, move || {
            app.borrow_mut().next();
        })?;
    }
    {
        let app = app.clone();
        on_click(document, surface::PREV_BUTTON_ID, move || {
            app.borrow_mut().prev();
        })?;
    }
    {
        let app = app.clone();
        on_click(document, surface::SHUFFLE_BUTTON_ID, move || {
            app.borrow_mut().shuffle()
        })?;
    }
    {
        let app = app.clone();
        on_click(document, surface::LEARNED_BUTTON_ID, move || {
            if let Err(e) = app.borrow_mut().mark_learned() {
                log::error!("Failed to save learned cards: {e}");
            }
        })?;
    }
    {
        let app = app.clone();
        on_click(document, surface::RESTART_BUTTON_ID, move || {
            app.borrow_mut().restart()
        })?;
    }
    {
        let app = app.clone();
        let toggle_for_change = toggle.clone();
        listen(&toggle, "change", move |_| {
            let mode = Mode::from_toggle(toggle_for_change.checked());
            if let Err(e) = app.borrow_mut().set_mode(mode) {
                log::error!("Failed to save mode: {e}");
            }
        })?;
    }

    let buttons = document.query_selector_all(&format!(".{}", surface::THEME_BUTTON_CLASS))?;
    for index in 0..buttons.length() {
        let Some(node) = buttons.get(index) else {
            continue;
        };
        let button: HtmlElement = node.dyn_into()?;
        let Some(name) = button.get_attribute(surface::THEME_ATTRIBUTE) else {
            log::warn!("Theme button without a {} attribute.", surface::THEME_ATTRIBUTE);
            continue;
        };
        let theme = match Theme::try_from(name.as_str()) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("Skipping theme button: {e}");
                continue;
            }
        };
        let app = app.clone();
        listen(&button, "click", move |_| {
            if let Err(e) = app.borrow_mut().set_theme(theme) {
                log::error!("Failed to save theme: {e}");
            }
        })?;
    }

    {
        let app = app.clone();
        let document_for_keys = document.clone();
        let selector: Node = selector.into();
        listen(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let selector_focused = document_for_keys
                .active_element()
                .is_some_and(|active| active.is_same_node(Some(&selector)));
            if app.borrow_mut().handle_key(&event.key(), selector_focused) {
                event.prevent_default();
            }
        })?;
    }

    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_click(
    document: &Document,
    id: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let element: HtmlElement = by_id(document, id)?;
    listen(&element, "click", move |_| handler())
}
