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

//! The closed set of built-in panel behaviours.
//!
//! The catalog's [`PanelBehaviorKind`] selects one of these when a panel
//! finishes loading. Each implements [`PanelLifecycle`]; [`PanelBehavior`]
//! dispatches to the selected one.

mod loading;

pub use loading::{LoadingPanel, CAPTION_ELEMENT};

use lumen_core::ui::{PanelBehaviorKind, PanelLifecycle, PanelNode};

/// A panel with no behaviour of its own; every hook is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainPanel;

impl PanelLifecycle for PlainPanel {}

/// One of the built-in behaviours, selected from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBehavior {
    /// See [`PlainPanel`].
    Plain(PlainPanel),
    /// See [`LoadingPanel`].
    Loading(LoadingPanel),
}

impl PanelBehavior {
    /// Instantiates the behaviour a descriptor asks for.
    pub fn from_kind(kind: &PanelBehaviorKind) -> Self {
        match kind {
            PanelBehaviorKind::Plain => Self::Plain(PlainPanel),
            PanelBehaviorKind::Loading { caption } => Self::Loading(LoadingPanel::new(caption)),
        }
    }

    /// Returns the loading behaviour, if that is what this is.
    pub fn as_loading(&self) -> Option<&LoadingPanel> {
        match self {
            Self::Loading(panel) => Some(panel),
            Self::Plain(_) => None,
        }
    }

    fn hooks(&mut self) -> &mut dyn PanelLifecycle {
        match self {
            Self::Plain(panel) => panel,
            Self::Loading(panel) => panel,
        }
    }
}

impl PanelLifecycle for PanelBehavior {
    fn on_init(&mut self, node: &mut PanelNode) {
        self.hooks().on_init(node);
    }

    fn on_active(&mut self, node: &mut PanelNode) {
        self.hooks().on_active(node);
    }

    fn on_inactive(&mut self, node: &mut PanelNode) {
        self.hooks().on_inactive(node);
    }

    fn on_update(&mut self, node: &mut PanelNode) {
        self.hooks().on_update(node);
    }

    fn on_periodic(&mut self, node: &mut PanelNode) {
        self.hooks().on_periodic(node);
    }

    fn on_clear(&mut self, node: &mut PanelNode) {
        self.hooks().on_clear(node);
    }
}
