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

use crate::types::preferences::Mode;
use crate::types::preferences::Theme;

/// The named regions and controls of the study surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The question, on the front face of the card.
    Front,
    /// The answer, on the back face of the card.
    Back,
    Explanation,
    Counter,
    ProgressBar,
    PrevButton,
    NextButton,
    RestartButton,
    LearnedButton,
}

/// The surface the controller renders to. Implementations assume every
/// slot exists.
pub trait View {
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Sets the width of a slot as a percentage of its container.
    fn set_width(&mut self, slot: Slot, percent: f64);

    fn set_enabled(&mut self, slot: Slot, enabled: bool);

    fn set_visible(&mut self, slot: Slot, visible: bool);

    /// Shows the back face of the card when `flipped`, the front otherwise.
    fn set_flipped(&mut self, flipped: bool);

    /// Applies the theme and marks its selector button active.
    fn apply_theme(&mut self, theme: Theme);

    /// Applies the mode and syncs the dark-mode toggle.
    fn apply_mode(&mut self, mode: Mode);

    /// Fills the set selector. `options` pairs each set id with its label.
    fn populate_sets(&mut self, options: &[(String, String)], selected: &str);

    /// Replaces the whole surface with a failure message.
    fn show_failure(&mut self, heading: &str, message: &str);

    /// Plays the brief cue that follows a shuffle.
    fn play_shuffle_cue(&mut self);

    /// Leaves the page for the given relative URL.
    fn navigate(&mut self, url: &str);
}
