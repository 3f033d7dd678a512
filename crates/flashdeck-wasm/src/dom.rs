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

use flashdeck_core::surface;
use flashdeck_core::types::preferences::Mode;
use flashdeck_core::types::preferences::Theme;
use flashdeck_core::view::Slot;
use flashdeck_core::view::View;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Document;
use web_sys::Element;
use web_sys::HtmlButtonElement;
use web_sys::HtmlElement;
use web_sys::HtmlInputElement;
use web_sys::HtmlOptionElement;
use web_sys::HtmlSelectElement;
use web_sys::Window;

use crate::local_storage::js_message;

/// The study surface of the hosting page.
pub struct DomView {
    window: Window,
    document: Document,
    body: HtmlElement,
    container: Element,
    card_inner: Element,
    front: Element,
    back: Element,
    explanation: Element,
    counter: Element,
    progress_bar: HtmlElement,
    prev: HtmlButtonElement,
    next: HtmlButtonElement,
    restart: HtmlButtonElement,
    learned: HtmlButtonElement,
    set_selector: HtmlSelectElement,
    dark_mode_toggle: HtmlInputElement,
    theme_buttons: Vec<HtmlElement>,
}

impl DomView {
    pub fn new(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let theme_buttons = {
            let nodes = document.query_selector_all(&format!(".{}", surface::THEME_BUTTON_CLASS))?;
            let mut buttons = Vec::new();
            for index in 0..nodes.length() {
                if let Some(node) = nodes.get(index) {
                    buttons.push(node.dyn_into::<HtmlElement>()?);
                }
            }
            buttons
        };
        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            body,
            container: by_class(document, surface::CONTAINER_CLASS)?,
            card_inner: by_class(document, surface::CARD_INNER_CLASS)?,
            front: by_id(document, surface::FRONT_TEXT_ID)?,
            back: by_id(document, surface::BACK_TEXT_ID)?,
            explanation: by_id(document, surface::EXPLANATION_ID)?,
            counter: by_id(document, surface::COUNTER_ID)?,
            progress_bar: by_id(document, surface::PROGRESS_BAR_ID)?,
            prev: by_id(document, surface::PREV_BUTTON_ID)?,
            next: by_id(document, surface::NEXT_BUTTON_ID)?,
            restart: by_id(document, surface::RESTART_BUTTON_ID)?,
            learned: by_id(document, surface::LEARNED_BUTTON_ID)?,
            set_selector: by_id(document, surface::SET_SELECTOR_ID)?,
            dark_mode_toggle: by_id(document, surface::DARK_MODE_TOGGLE_ID)?,
            theme_buttons,
        })
    }

    fn element(&self, slot: Slot) -> &Element {
        match slot {
            Slot::Front => &self.front,
            Slot::Back => &self.back,
            Slot::Explanation => &self.explanation,
            Slot::Counter => &self.counter,
            Slot::ProgressBar => &self.progress_bar,
            Slot::PrevButton => &self.prev,
            Slot::NextButton => &self.next,
            Slot::RestartButton => &self.restart,
            Slot::LearnedButton => &self.learned,
        }
    }

    fn button(&self, slot: Slot) -> Option<&HtmlButtonElement> {
        match slot {
            Slot::PrevButton => Some(&self.prev),
            Slot::NextButton => Some(&self.next),
            Slot::RestartButton => Some(&self.restart),
            Slot::LearnedButton => Some(&self.learned),
            _ => None,
        }
    }

    fn append_option(&self, value: &str, label: &str, selected: bool) -> Result<(), JsValue> {
        let option: HtmlOptionElement = self.document.create_element("option")?.dyn_into()?;
        option.set_value(value);
        option.set_text(label);
        option.set_selected(selected);
        self.set_selector.append_child(&option)?;
        Ok(())
    }

    fn render_failure(&self, heading: &str, message: &str) -> Result<(), JsValue> {
        self.container.set_inner_html("");
        let title = self.document.create_element("h1")?;
        title.set_attribute("style", "color: red;")?;
        title.set_text_content(Some(heading));
        let body = self.document.create_element("p")?;
        body.set_text_content(Some(message));
        self.container.append_child(&title)?;
        self.container.append_child(&body)?;
        Ok(())
    }

    fn start_shuffle_cue(&self) -> Result<(), JsValue> {
        self.container.class_list().add_1(surface::SHUFFLING_CLASS)?;
        let container = self.container.clone();
        let done = Closure::once_into_js(move || {
            report(
                container.class_list().remove_1(surface::SHUFFLING_CLASS),
                "end shuffle cue",
            );
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                done.unchecked_ref(),
                surface::SHUFFLE_CUE_MS,
            )?;
        Ok(())
    }
}

impl View for DomView {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.element(slot).set_text_content(Some(text));
    }

    fn set_width(&mut self, slot: Slot, percent: f64) {
        let element: &HtmlElement = match slot {
            Slot::ProgressBar => &self.progress_bar,
            _ => return,
        };
        report(
            element.style().set_property("width", &width_value(percent)),
            "set width",
        );
    }

    fn set_enabled(&mut self, slot: Slot, enabled: bool) {
        if let Some(button) = self.button(slot) {
            button.set_disabled(!enabled);
        }
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        report(
            self.element(slot)
                .class_list()
                .toggle_with_force(surface::HIDDEN_CLASS, !visible),
            "toggle visibility",
        );
    }

    fn set_flipped(&mut self, flipped: bool) {
        report(
            self.card_inner
                .class_list()
                .toggle_with_force(surface::FLIPPED_CLASS, flipped),
            "flip card",
        );
    }

    fn apply_theme(&mut self, theme: Theme) {
        report(
            self.body
                .dataset()
                .set(surface::COLOR_THEME_KEY, theme.as_str()),
            "set theme",
        );
        for button in &self.theme_buttons {
            let active = button
                .get_attribute(surface::THEME_ATTRIBUTE)
                .is_some_and(|name| name == theme.as_str());
            report(
                button
                    .class_list()
                    .toggle_with_force(surface::ACTIVE_CLASS, active),
                "mark theme button",
            );
        }
    }

    fn apply_mode(&mut self, mode: Mode) {
        report(
            self.body
                .class_list()
                .toggle_with_force(surface::DARK_MODE_CLASS, mode.is_dark()),
            "set mode",
        );
        self.dark_mode_toggle.set_checked(mode.is_dark());
    }

    fn populate_sets(&mut self, options: &[(String, String)], selected: &str) {
        for (value, label) in options {
            report(
                self.append_option(value, label, value == selected),
                "add set option",
            );
        }
    }

    fn show_failure(&mut self, heading: &str, message: &str) {
        report(self.render_failure(heading, message), "show failure");
    }

    fn play_shuffle_cue(&mut self) {
        report(self.start_shuffle_cue(), "play shuffle cue");
    }

    fn navigate(&mut self, url: &str) {
        report(self.window.location().set_href(url), "navigate");
    }
}

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has the wrong type")))
}

fn by_class<T: JsCast>(document: &Document, class: &str) -> Result<T, JsValue> {
    document
        .query_selector(&format!(".{class}"))?
        .ok_or_else(|| JsValue::from_str(&format!("missing element .{class}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element .{class} has the wrong type")))
}

/// DOM writes don't fail on a well-formed page; log the ones that do.
fn report<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(e) = result {
        log::error!("Failed to {action}: {}", js_message(&e));
    }
}

/// The CSS width for a percentage, e.g. `33.333%`.
fn width_value(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_value() {
        assert_eq!(width_value(100.0), "100%");
        assert_eq!(width_value(50.0), "50%");
        assert_eq!(width_value(12.5), "12.5%");
    }
}
