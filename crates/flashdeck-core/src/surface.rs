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

//! Element ids and class names shared by the hosting page and the browser
//! binding.

pub const CONTAINER_CLASS: &str = "flashcard-game-container";
pub const CARD_INNER_CLASS: &str = "card-inner";
pub const THEME_BUTTON_CLASS: &str = "theme-btn";

pub const FLASHCARD_ID: &str = "flashcard";
pub const SET_SELECTOR_ID: &str = "set-selector";
pub const FRONT_TEXT_ID: &str = "card-front-text";
pub const BACK_TEXT_ID: &str = "card-back-text";
pub const EXPLANATION_ID: &str = "card-explanation";
pub const COUNTER_ID: &str = "card-counter";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PREV_BUTTON_ID: &str = "prev-btn";
pub const NEXT_BUTTON_ID: &str = "next-btn";
pub const SHUFFLE_BUTTON_ID: &str = "shuffle-btn";
pub const LEARNED_BUTTON_ID: &str = "mark-learned-btn";
pub const RESTART_BUTTON_ID: &str = "restart-btn";
pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";

/// Set on the card's inner element while the back face shows.
pub const FLIPPED_CLASS: &str = "is-flipped";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const SHUFFLING_CLASS: &str = "shuffling-animation";

/// The `data-*` attribute naming a theme button's theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// The body dataset key holding the active theme (`data-color-theme`).
pub const COLOR_THEME_KEY: &str = "colorTheme";

/// How long the shuffle cue stays on, in milliseconds.
pub const SHUFFLE_CUE_MS: i32 = 500;
