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

//! # Lumen Agents
//!
//! The stateful half of the framework. Each agent owns its state, reacts to
//! its inputs once per tick, and delegates pure computation to the lanes.
//!
//! - [`screen_agent`]: the resolution monitor.
//! - [`view_agent`]: the fixed-aspect camera and the canvases that follow it.
//! - [`asset_agent`]: fronts the panel loader.
//! - [`ui_agent`]: the panel stack and navigation queue.

#![warn(missing_docs)]

pub mod asset_agent;
pub mod screen_agent;
pub mod ui_agent;
pub mod view_agent;

pub use asset_agent::AssetAgent;
pub use screen_agent::ScreenAgent;
pub use ui_agent::{UiAgent, UiAgentConfig, UiError, UiEvent};
pub use view_agent::{Camera2D, CameraExtent, CanvasScaler};
