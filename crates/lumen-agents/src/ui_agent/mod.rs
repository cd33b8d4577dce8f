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

//! The UI stack manager.
//!
//! Navigation requests are queued and resolved one at a time through the
//! [`AssetAgent`](crate::asset_agent::AssetAgent). A finished load becomes a
//! [`PanelInstance`] on top of the visibility stack; at most one full-screen
//! panel is visible at any time.
//!
//! Each request moves through `Queued → Loading → (Attached | Failed)`.
//! Outcomes are published as [`UiEvent`]s.

mod agent;
mod event;
mod instance;

pub use agent::{UiAgent, UiAgentConfig};
pub use event::{UiError, UiEvent};
pub use instance::{LifecyclePhase, PanelInstance};
