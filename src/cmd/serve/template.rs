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

use flashdeck_core::labels;
use flashdeck_core::surface;
use flashdeck_core::types::preferences::Theme;
use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

/// Loads the browser bundle. `init` fetches the wasm module, whose start
/// function then reads `window.allFlashcardSets`.
const BOOTSTRAP: &str = r#"import init from "/pkg/flashdeck_wasm.js";
init();
"#;

pub fn page_template() -> Markup {
    html! {
        (DOCTYPE)
        html lang="bn" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "ফ্ল্যাশকার্ড" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                div.(surface::CONTAINER_CLASS) {
                    (toolbar())
                    div.progress {
                        div #(surface::PROGRESS_BAR_ID) {}
                    }
                    (card())
                    p #(surface::COUNTER_ID) {}
                    (controls())
                }
                script src="/sets.js" {}
                script type="module" { (PreEscaped(BOOTSTRAP)) }
            }
        }
    }
}

fn toolbar() -> Markup {
    html! {
        div.toolbar {
            select #(surface::SET_SELECTOR_ID) aria-label="সেট নির্বাচন" {}
            div.themes {
                @for theme in Theme::ALL {
                    button.(surface::THEME_BUTTON_CLASS) type="button" data-theme=(theme.as_str()) title=(theme.as_str()) {}
                }
            }
            label.mode-toggle {
                input #(surface::DARK_MODE_TOGGLE_ID) type="checkbox";
                span { "ডার্ক মোড" }
            }
        }
    }
}

fn card() -> Markup {
    html! {
        div #(surface::FLASHCARD_ID) .flashcard {
            div.(surface::CARD_INNER_CLASS) {
                div.card-face.card-front {
                    p #(surface::FRONT_TEXT_ID) {}
                }
                div.card-face.card-back {
                    p #(surface::BACK_TEXT_ID) {}
                    p #(surface::EXPLANATION_ID) {}
                }
            }
        }
    }
}

fn controls() -> Markup {
    html! {
        div.controls {
            button #(surface::PREV_BUTTON_ID) type="button" { "← আগের" }
            button #(surface::SHUFFLE_BUTTON_ID) type="button" { "এলোমেলো" }
            button #(surface::LEARNED_BUTTON_ID) type="button" { (labels::MARK_LEARNED) }
            button #(surface::NEXT_BUTTON_ID) type="button" { "পরের →" }
        }
        button #(surface::RESTART_BUTTON_ID) .(surface::HIDDEN_CLASS) type="button" { "আবার শুরু করুন" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_region() {
        let html = page_template().into_string();
        for id in [
            surface::FLASHCARD_ID,
            surface::SET_SELECTOR_ID,
            surface::FRONT_TEXT_ID,
            surface::BACK_TEXT_ID,
            surface::EXPLANATION_ID,
            surface::COUNTER_ID,
            surface::PROGRESS_BAR_ID,
            surface::PREV_BUTTON_ID,
            surface::NEXT_BUTTON_ID,
            surface::SHUFFLE_BUTTON_ID,
            surface::LEARNED_BUTTON_ID,
            surface::RESTART_BUTTON_ID,
            surface::DARK_MODE_TOGGLE_ID,
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(html.contains(surface::CONTAINER_CLASS));
        assert!(html.contains(surface::CARD_INNER_CLASS));
    }

    #[test]
    fn test_page_has_a_button_per_theme() {
        let html = page_template().into_string();
        for theme in Theme::ALL {
            assert!(html.contains(&format!("data-theme=\"{}\"", theme.as_str())));
        }
    }

    #[test]
    fn test_page_loads_sets_before_bundle() {
        let html = page_template().into_string();
        let sets = html.find("/sets.js");
        let bundle = html.find("/pkg/flashdeck_wasm.js");
        assert!(sets.is_some() && bundle.is_some());
        assert!(sets < bundle);
    }
}
