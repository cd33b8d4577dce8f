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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a navigable panel.
///
/// Every kind a game pushes must have exactly one entry in the panel
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UiKind {
    /// The boot/loading screen.
    Loading,
    /// The title screen.
    Title,
    /// The main lobby.
    Lobby,
    /// The in-game shop.
    Shop,
    /// The settings screen.
    Settings,
    /// A modal dialog drawn over the current screen.
    Dialog,
    /// A transient notification strip.
    Toast,
}

impl UiKind {
    /// Every kind, in declaration order.
    pub const ALL: [UiKind; 7] = [
        UiKind::Loading,
        UiKind::Title,
        UiKind::Lobby,
        UiKind::Shop,
        UiKind::Settings,
        UiKind::Dialog,
        UiKind::Toast,
    ];
}

impl fmt::Display for UiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
