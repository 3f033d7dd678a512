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

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::Fallible;
use crate::keyboard::Shortcut;
use crate::labels;
use crate::query::selected_set_id;
use crate::query::set_query;
use crate::schedule::RENDER_DELAY;
use crate::schedule::RenderTicket;
use crate::schedule::Scheduler;
use crate::schedule::TaskHandle;
use crate::session::Session;
use crate::storage::MODE_KEY;
use crate::storage::Storage;
use crate::storage::THEME_KEY;
use crate::storage::load_learned;
use crate::storage::load_mode;
use crate::storage::load_theme;
use crate::storage::save_learned;
use crate::types::preferences::Mode;
use crate::types::card::CardId;
use crate::types::preferences::Theme;
use crate::types::set_table::SetTable;
use crate::view::Slot;
use crate::view::View;

/// What the page supplies at startup.
pub struct Boot<'a> {
    /// The page URL's query string, e.g. `?set=2`.
    pub query: &'a str,
    /// The global set table, if the page defined one.
    pub table: Option<&'a SetTable>,
    /// Seeds the shuffle.
    pub seed: u64,
}

/// Drives one study session: owns the session state and translates user
/// actions into view updates and storage writes.
pub struct Controller<V: View, S: Storage, T: Scheduler> {
    view: V,
    storage: S,
    scheduler: T,
    session: Session,
    /// Whether the card shows its back face.
    flipped: bool,
    theme: Theme,
    mode: Mode,
    /// The ticket of the most recently requested render.
    ticket: RenderTicket,
    pending: Option<TaskHandle>,
    /// The card whose text is on screen. Lags the session index while a
    /// render is pending.
    displayed: Option<CardId>,
    rng: SmallRng,
}

impl<V: View, S: Storage, T: Scheduler> Controller<V, S, T> {
    /// Loads the session selected by the page and renders its first card.
    ///
    /// If the selected set cannot be found the view is replaced with a
    /// failure message and the error is returned. There is no controller
    /// in that case, so nothing on the page responds anymore.
    pub fn start(boot: Boot<'_>, mut view: V, mut storage: S, scheduler: T) -> Fallible<Self> {
        let set_id = selected_set_id(boot.query);
        let learned = load_learned(&storage, &set_id);

        let theme = load_theme(&storage);
        view.apply_theme(theme);
        persist(&mut storage, THEME_KEY, theme.as_str());
        let mode = load_mode(&storage);
        view.apply_mode(mode);
        persist(&mut storage, MODE_KEY, mode.as_str());

        if let Some(table) = boot.table {
            let options: Vec<(String, String)> = table
                .set_ids()
                .into_iter()
                .map(|id| (id.to_string(), labels::set_option(id)))
                .collect();
            view.populate_sets(&options, &set_id);
        }

        let session = match Session::load(&set_id, boot.table, learned) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Cannot start session: {e}");
                view.show_failure(labels::FAILURE_HEADING, &labels::set_not_found(&set_id));
                return Err(e);
            }
        };

        let mut controller = Self {
            view,
            storage,
            scheduler,
            session,
            flipped: false,
            theme,
            mode,
            ticket: RenderTicket::new(0),
            pending: None,
            displayed: None,
            rng: SmallRng::seed_from_u64(boot.seed),
        };
        controller.show_card(0);
        Ok(controller)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending.is_some()
    }

    /// Moves to `index` and schedules the card's render. The card is turned
    /// face up at once; its text is written once [`RENDER_DELAY`] elapses,
    /// so the flip-back transition finishes first. A render that is still
    /// pending is cancelled and replaced.
    ///
    /// Returns false, doing nothing, if `index` is out of range.
    pub fn show_card(&mut self, index: usize) -> bool {
        if !self.session.go_to(index) {
            return false;
        }
        if self.flipped {
            self.flipped = false;
            self.view.set_flipped(false);
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.ticket = self.ticket.next();
        self.pending = Some(self.scheduler.schedule(RENDER_DELAY, self.ticket));
        true
    }

    /// Writes the current card to the view. Called by the scheduler when a
    /// render's delay has elapsed; tickets from superseded renders are
    /// ignored. Returns whether anything was rendered.
    pub fn complete_render(&mut self, ticket: RenderTicket) -> bool {
        if ticket != self.ticket || self.pending.is_none() {
            log::debug!("Ignoring stale render {}.", ticket.generation());
            return false;
        }
        self.pending = None;
        let index = self.session.current_index();
        let Some(card) = self.session.card(index) else {
            return false;
        };
        self.view.set_text(Slot::Front, card.question());
        self.view.set_text(Slot::Back, card.answer());
        self.view.set_text(Slot::Explanation, card.explanation_text());
        self.displayed = Some(card.id().clone());
        self.render_position(index);
        true
    }

    fn render_position(&mut self, index: usize) {
        let total = self.session.len();
        let last = self.session.is_last(index);
        self.view.set_text(Slot::Counter, &labels::counter(index, total));
        self.view
            .set_width(Slot::ProgressBar, self.session.progress_percent(index));
        self.view.set_enabled(Slot::PrevButton, index > 0);
        self.view.set_enabled(Slot::NextButton, !last);
        self.view.set_visible(Slot::RestartButton, last);
        self.render_learned_button();
    }

    fn render_learned_button(&mut self) {
        let Some(id) = &self.displayed else {
            return;
        };
        if self.session.is_learned(id) {
            self.view.set_text(Slot::LearnedButton, labels::LEARNED);
            self.view.set_enabled(Slot::LearnedButton, false);
        } else {
            self.view.set_text(Slot::LearnedButton, labels::MARK_LEARNED);
            self.view.set_enabled(Slot::LearnedButton, true);
        }
    }

    /// Turns the card over. Only the view changes.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        self.view.set_flipped(self.flipped);
    }

    pub fn next(&mut self) -> bool {
        match self.session.next_index() {
            Some(index) => self.show_card(index),
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        match self.session.prev_index() {
            Some(index) => self.show_card(index),
            None => false,
        }
    }

    /// Shuffles the deck and starts over from its new first card.
    pub fn shuffle(&mut self) {
        self.session.shuffle(&mut self.rng);
        log::debug!("Shuffled set '{}'.", self.session.set_id());
        self.show_card(0);
        self.view.play_shuffle_cue();
    }

    pub fn restart(&mut self) {
        self.show_card(0);
    }

    /// Marks the card on screen learned and persists the set's learned ids.
    /// While a render is pending that is still the card being left, not the
    /// one at the session index. Marking a learned card again changes
    /// nothing. The learned state is kept in memory even if the write fails.
    pub fn mark_learned(&mut self) -> Fallible<()> {
        let Some(id) = self.displayed.clone() else {
            return Ok(());
        };
        if self.session.mark(&id) {
            log::debug!("Marked {id} learned.");
        }
        self.render_learned_button();
        save_learned(
            &mut self.storage,
            self.session.set_id(),
            self.session.learned(),
        )
    }

    pub fn set_theme(&mut self, theme: Theme) -> Fallible<()> {
        self.theme = theme;
        self.view.apply_theme(theme);
        self.storage.set(THEME_KEY, theme.as_str())
    }

    pub fn set_mode(&mut self, mode: Mode) -> Fallible<()> {
        self.mode = mode;
        self.view.apply_mode(mode);
        self.storage.set(MODE_KEY, mode.as_str())
    }

    /// Reloads the page on another set. The current session is abandoned;
    /// its learned ids are already persisted.
    pub fn change_set(&mut self, set_id: &str) {
        self.view.navigate(&set_query(set_id));
    }

    /// Handles a key press. Keys are ignored while the set selector has
    /// focus. Returns whether the key's default action must be suppressed.
    pub fn handle_key(&mut self, key: &str, selector_focused: bool) -> bool {
        if selector_focused {
            return false;
        }
        let Some(shortcut) = Shortcut::from_key(key) else {
            return false;
        };
        match shortcut {
            Shortcut::Next => {
                self.next();
            }
            Shortcut::Prev => {
                self.prev();
            }
            Shortcut::Flip => self.flip(),
        }
        shortcut.prevents_default()
    }
}

fn persist<S: Storage>(storage: &mut S, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        log::warn!("Failed to write {key}: {e}");
    }
}
