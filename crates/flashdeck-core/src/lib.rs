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

//! The flashdeck study session, independent of any browser.
//!
//! A [`controller::Controller`] owns the [`session::Session`] and talks to
//! the outside world through three seams: a [`view::View`] it renders to, a
//! [`storage::Storage`] it persists to, and a [`schedule::Scheduler`] that
//! defers card renders until the flip transition has finished.

pub mod controller;
pub mod error;
pub mod keyboard;
pub mod labels;
pub mod query;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod types;
pub mod view;
