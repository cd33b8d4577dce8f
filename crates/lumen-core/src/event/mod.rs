// Copyright 2025 eraflo
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

//! Provides foundational primitives for event-driven communication.
//!
//! Two flavours live here:
//! - [`Subject`], the synchronous, priority-ordered notification hub that
//!   observable components own. Observers are called in place, on the tick
//!   that caused the change.
//! - [`EventBus`], a generic, thread-safe MPSC channel used to report
//!   outcomes (e.g. panel load failures) to whoever drains it.

mod bus;
mod subject;

pub use self::bus::EventBus;
pub use self::subject::{Observer, ObserverId, Subject};
