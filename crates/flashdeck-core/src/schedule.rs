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

use std::time::Duration;

/// How long the flip-back transition runs before the card text is swapped.
pub const RENDER_DELAY: Duration = Duration::from_millis(150);

/// Identifies one requested render. Only the most recent ticket is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A handle to a scheduled task, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Runs deferred renders. When the delay elapses the implementation must
/// hand the ticket back to `Controller::complete_render`.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, ticket: RenderTicket) -> TaskHandle;

    /// Cancels a task. Cancelling a task that already ran is a no-op.
    fn cancel(&mut self, handle: TaskHandle);
}
