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

//! The public-facing Software Development Kit (SDK) for Lumen.
//!
//! A game builds one [`Game`] from a [`GameConfig`], hands it a viewport
//! source and a panel loader, and calls [`Game::tick`] once per frame.

#![warn(missing_docs)]

mod clock;
mod config;
mod game;

pub use clock::PeriodicClock;
pub use config::{CameraConfig, GameConfig, UiConfig};
pub use game::Game;

/// Re-exports of the types a game usually needs.
pub mod prelude {
    pub use crate::{Game, GameConfig};
    pub use lumen_agents::{UiError, UiEvent};
    pub use lumen_core::asset::{AssetRef, PanelLoader};
    pub use lumen_core::math::Extent2D;
    pub use lumen_core::platform::ScreenSource;
    pub use lumen_core::ui::{PanelBehaviorKind, PanelDescriptor, UiKind};
    pub use lumen_data::UiCatalog;
}
