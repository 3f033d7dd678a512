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

use std::collections::BTreeSet;
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::set_table::SetTable;

/// The study state of one set: its deck, the position in it, and which
/// cards have been learned.
///
/// For a non-empty deck the current index is always in range. Movements
/// that would leave the deck are refused.
#[derive(Clone, Debug)]
pub struct Session {
    set_id: String,
    cards: Vec<Card>,
    current: usize,
    learned: BTreeSet<CardId>,
}

impl Session {
    /// Builds the deck for `set_id`. Learned ids that don't name a card of
    /// the deck are dropped.
    pub fn load(
        set_id: &str,
        table: Option<&SetTable>,
        learned: impl IntoIterator<Item = CardId>,
    ) -> Fallible<Self> {
        let Some(table) = table else {
            return fail("no set table was supplied.");
        };
        let Some(records) = table.get(set_id) else {
            return fail(format!("set '{set_id}' not found."));
        };
        let cards: Vec<Card> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Card::from_raw(set_id, index, record))
            .collect();
        let (learned, stale) = {
            let known: HashSet<&CardId> = cards.iter().map(Card::id).collect();
            let (kept, stale): (Vec<CardId>, Vec<CardId>) =
                learned.into_iter().partition(|id| known.contains(id));
            (kept.into_iter().collect::<BTreeSet<CardId>>(), stale.len())
        };
        if stale > 0 {
            log::debug!("Dropped {stale} learned ids not in set '{set_id}'.");
        }
        log::debug!(
            "Loaded set '{set_id}' with {} cards ({} learned).",
            cards.len(),
            learned.len()
        );
        Ok(Self {
            set_id: set_id.to_string(),
            cards,
            current: 0,
            learned,
        })
    }

    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    /// The cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.cards.len()
    }

    /// Moves to `index`. Returns false, leaving the position unchanged, when
    /// the index is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// The index after the current one, unless the current card is last.
    pub fn next_index(&self) -> Option<usize> {
        let next = self.current + 1;
        (next < self.cards.len()).then_some(next)
    }

    /// The index before the current one, unless the current card is first.
    pub fn prev_index(&self) -> Option<usize> {
        self.current.checked_sub(1)
    }

    /// Permutes the display order in place and returns to the first card.
    /// Card ids travel with their cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.current = 0;
    }

    /// Marks the current card learned. Returns true if it wasn't already.
    pub fn mark_learned(&mut self) -> bool {
        match self.current_card().map(|card| card.id().clone()) {
            Some(id) => self.mark(&id),
            None => false,
        }
    }

    /// Marks the card with `id` learned. Returns true if it wasn't already;
    /// ids of cards outside the deck are refused.
    pub fn mark(&mut self, id: &CardId) -> bool {
        if !self.cards.iter().any(|card| card.id() == id) {
            return false;
        }
        self.learned.insert(id.clone())
    }

    pub fn is_learned(&self, id: &CardId) -> bool {
        self.learned.contains(id)
    }

    pub fn is_current_learned(&self) -> bool {
        self.current_card()
            .is_some_and(|card| self.learned.contains(card.id()))
    }

    pub fn learned(&self) -> &BTreeSet<CardId> {
        &self.learned
    }

    /// How far through the deck the card at `index` is, in percent.
    pub fn progress_percent(&self, index: usize) -> f64 {
        (index + 1) as f64 / self.cards.len() as f64 * 100.0
    }
}
