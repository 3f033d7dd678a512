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

//! In-memory views and schedulers for driving a controller in tests.

use std::cell::Ref;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::RenderTicket;
use crate::schedule::Scheduler;
use crate::schedule::TaskHandle;
use crate::types::preferences::Mode;
use crate::types::preferences::Theme;
use crate::view::Slot;
use crate::view::View;

/// Everything a view has been told to show.
#[derive(Default)]
pub struct Surface {
    pub texts: HashMap<Slot, String>,
    pub widths: HashMap<Slot, f64>,
    pub enabled: HashMap<Slot, bool>,
    pub visible: HashMap<Slot, bool>,
    pub flipped: bool,
    pub theme: Option<Theme>,
    pub mode: Option<Mode>,
    pub options: Vec<(String, String)>,
    pub selected: Option<String>,
    pub failure: Option<(String, String)>,
    pub shuffle_cues: usize,
    pub navigated: Option<String>,
}

/// A view that records into a shared [`Surface`]. Clones share the surface,
/// so a test keeps a clone to inspect what the controller rendered.
#[derive(Clone, Default)]
pub struct RecordingView {
    surface: Rc<RefCell<Surface>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Ref<'_, Surface> {
        self.surface.borrow()
    }

    pub fn text(&self, slot: Slot) -> String {
        self.surface().texts.get(&slot).cloned().unwrap_or_default()
    }

    pub fn width(&self, slot: Slot) -> Option<f64> {
        self.surface().widths.get(&slot).copied()
    }

    pub fn enabled(&self, slot: Slot) -> Option<bool> {
        self.surface().enabled.get(&slot).copied()
    }

    pub fn visible(&self, slot: Slot) -> Option<bool> {
        self.surface().visible.get(&slot).copied()
    }
}

impl View for RecordingView {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.surface.borrow_mut().texts.insert(slot, text.to_string());
    }

    fn set_width(&mut self, slot: Slot, percent: f64) {
        self.surface.borrow_mut().widths.insert(slot, percent);
    }

    fn set_enabled(&mut self, slot: Slot, enabled: bool) {
        self.surface.borrow_mut().enabled.insert(slot, enabled);
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        self.surface.borrow_mut().visible.insert(slot, visible);
    }

    fn set_flipped(&mut self, flipped: bool) {
        self.surface.borrow_mut().flipped = flipped;
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.surface.borrow_mut().theme = Some(theme);
    }

    fn apply_mode(&mut self, mode: Mode) {
        self.surface.borrow_mut().mode = Some(mode);
    }

    fn populate_sets(&mut self, options: &[(String, String)], selected: &str) {
        let mut surface = self.surface.borrow_mut();
        surface.options = options.to_vec();
        surface.selected = Some(selected.to_string());
    }

    fn show_failure(&mut self, heading: &str, message: &str) {
        self.surface.borrow_mut().failure = Some((heading.to_string(), message.to_string()));
    }

    fn play_shuffle_cue(&mut self) {
        self.surface.borrow_mut().shuffle_cues += 1;
    }

    fn navigate(&mut self, url: &str) {
        self.surface.borrow_mut().navigated = Some(url.to_string());
    }
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    due: Vec<(TaskHandle, Duration, RenderTicket)>,
    cancelled: Vec<TaskHandle>,
    delays: Vec<Duration>,
}

/// A scheduler whose tasks run only when the test takes them. Clones share
/// the queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the tickets of all tasks not yet cancelled.
    pub fn take_due(&self) -> Vec<RenderTicket> {
        let mut queue = self.queue.borrow_mut();
        queue.due.drain(..).map(|(_, _, ticket)| ticket).collect()
    }

    pub fn cancelled(&self) -> Vec<TaskHandle> {
        self.queue.borrow().cancelled.clone()
    }

    /// The delays of every task ever scheduled.
    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().delays.clone()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, ticket: RenderTicket) -> TaskHandle {
        let mut queue = self.queue.borrow_mut();
        let handle = TaskHandle::new(queue.next_id);
        queue.next_id += 1;
        queue.due.push((handle, delay, ticket));
        queue.delays.push(delay);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.due.len();
        queue.due.retain(|(h, _, _)| *h != handle);
        if queue.due.len() < before {
            queue.cancelled.push(handle);
        }
    }
}
