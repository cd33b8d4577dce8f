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

use lumen_core::ui::{PanelLifecycle, PanelNode};

/// The text element the loading prefab shows its caption in.
pub const CAPTION_ELEMENT: &str = "company_name";

/// The boot screen shown while the game warms up.
///
/// Writes its caption into the prefab on init and keeps simple counters of
/// how long it has been visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingPanel {
    caption: String,
    frames_visible: u64,
    periods_visible: u64,
}

impl LoadingPanel {
    /// Creates the behaviour with the caption to display.
    pub fn new(caption: &str) -> Self {
        Self {
            caption: caption.to_string(),
            frames_visible: 0,
            periods_visible: 0,
        }
    }

    /// The caption written on init.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Ticks spent visible.
    pub fn frames_visible(&self) -> u64 {
        self.frames_visible
    }

    /// Periodic ticks spent visible.
    pub fn periods_visible(&self) -> u64 {
        self.periods_visible
    }
}

impl PanelLifecycle for LoadingPanel {
    fn on_init(&mut self, node: &mut PanelNode) {
        if !node.elements.set_text(CAPTION_ELEMENT, &self.caption) {
            log::warn!(
                "LoadingPanel: prefab '{}' has no '{CAPTION_ELEMENT}' text",
                node.asset()
            );
        }
    }

    fn on_update(&mut self, _node: &mut PanelNode) {
        self.frames_visible += 1;
    }

    fn on_periodic(&mut self, _node: &mut PanelNode) {
        self.periods_visible += 1;
    }
}
