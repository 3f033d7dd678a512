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
use std::time::Duration;

use flashdeck_core::schedule::RenderTicket;
use flashdeck_core::schedule::Scheduler;
use flashdeck_core::schedule::TaskHandle;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::local_storage::js_message;

type Target = Box<dyn Fn(RenderTicket)>;

/// Where elapsed render tickets are delivered. The controller is created
/// after its scheduler, so the sink starts unconnected.
#[derive(Clone, Default)]
pub struct RenderSink {
    target: Rc<RefCell<Option<Target>>>,
}

impl RenderSink {
    pub fn connect(&self, target: impl Fn(RenderTicket) + 'static) {
        *self.target.borrow_mut() = Some(Box::new(target));
    }

    fn deliver(&self, ticket: RenderTicket) {
        match self.target.borrow().as_ref() {
            Some(target) => target(ticket),
            None => log::warn!("Render {} elapsed before the page was ready.", ticket.generation()),
        }
    }
}

/// Schedules renders with `setTimeout`.
pub struct TimeoutScheduler {
    window: Window,
    sink: RenderSink,
}

impl TimeoutScheduler {
    pub fn new(window: Window, sink: RenderSink) -> Self {
        Self { window, sink }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay: Duration, ticket: RenderTicket) -> TaskHandle {
        let sink = self.sink.clone();
        let callback = Closure::once_into_js(move || sink.deliver(ticket));
        let timeout = delay.as_millis().min(i32::MAX as u128) as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        {
            Ok(id) => TaskHandle::new(id as u64),
            Err(e) => {
                log::error!("Cannot schedule render: {}", js_message(&e));
                TaskHandle::new(0)
            }
        }
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.window.clear_timeout_with_handle(handle.raw() as i32);
    }
}
