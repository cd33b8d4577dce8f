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

use lumen_core::ui::{PanelDescriptor, PanelLifecycle, PanelNode, UiKind};
use lumen_data::PanelBehavior;

/// Where an instance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Loaded, not yet initialized.
    Created,
    /// Initialized; may be toggled, updated and ticked.
    Initialized,
    /// Cleared; receives no further calls.
    Cleared,
}

/// A loaded panel together with its descriptor and behaviour.
///
/// Enforces the lifecycle protocol around the behaviour's hooks: `init`
/// exactly once before anything else, `update`/`periodic` only while the
/// canvas is enabled, and nothing after `clear`. Calls outside the protocol
/// are ignored and logged.
#[derive(Debug)]
pub struct PanelInstance {
    descriptor: PanelDescriptor,
    node: PanelNode,
    behavior: PanelBehavior,
    depth: usize,
    phase: LifecyclePhase,
}

impl PanelInstance {
    /// Wraps a freshly loaded node, selecting the behaviour from `descriptor`.
    pub fn new(descriptor: PanelDescriptor, node: PanelNode) -> Self {
        let behavior = PanelBehavior::from_kind(&descriptor.behavior);
        Self {
            descriptor,
            node,
            behavior,
            depth: 0,
            phase: LifecyclePhase::Created,
        }
    }

    /// Initializes the panel at stack position `depth`.
    ///
    /// The canvas takes over its own sorting with `sorting_order = depth`,
    /// so deeper panels draw on top.
    pub fn init(&mut self, depth: usize) {
        if !self.expect_phase(LifecyclePhase::Created, "init") {
            return;
        }
        self.depth = depth;
        self.node.canvas.override_sorting = true;
        self.node.canvas.sorting_order = i32::try_from(depth).unwrap_or(i32::MAX);
        self.behavior.on_init(&mut self.node);
        self.phase = LifecyclePhase::Initialized;
    }

    /// Shows the panel.
    pub fn activate(&mut self) {
        if !self.expect_phase(LifecyclePhase::Initialized, "activate") {
            return;
        }
        self.node.canvas.enabled = true;
        self.behavior.on_active(&mut self.node);
    }

    /// Hides the panel without removing it.
    pub fn deactivate(&mut self) {
        if !self.expect_phase(LifecyclePhase::Initialized, "deactivate") {
            return;
        }
        self.node.canvas.enabled = false;
        self.behavior.on_inactive(&mut self.node);
    }

    /// Per-tick update; skipped while hidden.
    pub fn update(&mut self) {
        if self.expect_phase(LifecyclePhase::Initialized, "update") && self.is_active() {
            self.behavior.on_update(&mut self.node);
        }
    }

    /// Periodic tick; skipped while hidden.
    pub fn periodic(&mut self) {
        if self.expect_phase(LifecyclePhase::Initialized, "periodic") && self.is_active() {
            self.behavior.on_periodic(&mut self.node);
        }
    }

    /// Runs the clear hook. Any later call is ignored.
    pub fn clear(&mut self) {
        if self.phase == LifecyclePhase::Cleared {
            log::warn!("PanelInstance: {} cleared twice", self.descriptor.kind);
            return;
        }
        self.behavior.on_clear(&mut self.node);
        self.phase = LifecyclePhase::Cleared;
    }

    fn expect_phase(&self, expected: LifecyclePhase, call: &str) -> bool {
        if self.phase == expected {
            return true;
        }
        log::warn!(
            "PanelInstance: ignoring '{call}' on {} in phase {:?}",
            self.descriptor.kind,
            self.phase
        );
        false
    }

    /// The panel kind.
    pub fn kind(&self) -> UiKind {
        self.descriptor.kind
    }

    /// The catalog entry this instance was loaded from.
    pub fn descriptor(&self) -> &PanelDescriptor {
        &self.descriptor
    }

    /// The instantiated node.
    pub fn node(&self) -> &PanelNode {
        &self.node
    }

    /// The behaviour driving this instance.
    pub fn behavior(&self) -> &PanelBehavior {
        &self.behavior
    }

    /// The stack position given at init.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Whether the panel is visible.
    pub fn is_active(&self) -> bool {
        self.node.canvas.enabled
    }

    /// Whether the panel occludes the panels below it.
    pub fn is_full_screen(&self) -> bool {
        self.descriptor.full_screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::asset::AssetRef;
    use lumen_core::ui::{ElementTable, InstanceId, PanelBehaviorKind};
    use lumen_data::panels::CAPTION_ELEMENT;

    fn loading_instance() -> PanelInstance {
        let asset = AssetRef::new("ui/loading.prefab");
        let descriptor = PanelDescriptor::new(UiKind::Loading, asset.clone())
            .full_screen()
            .with_behavior(PanelBehaviorKind::Loading {
                caption: "Lumen Studio".to_string(),
            });
        let node = PanelNode::new(InstanceId::new(1), asset)
            .with_elements(ElementTable::new().with_text(CAPTION_ELEMENT, "Canvas/Company", ""));
        PanelInstance::new(descriptor, node)
    }

    fn frames(instance: &PanelInstance) -> u64 {
        instance
            .behavior()
            .as_loading()
            .map(|p| p.frames_visible())
            .unwrap_or_default()
    }

    #[test]
    fn init_sets_sorting_and_runs_hook() {
        let mut instance = loading_instance();
        instance.init(3);

        assert_eq!(instance.phase(), LifecyclePhase::Initialized);
        assert!(instance.node().canvas.override_sorting);
        assert_eq!(instance.node().canvas.sorting_order, 3);
        assert_eq!(instance.node().elements.text(CAPTION_ELEMENT), Some("Lumen Studio"));
    }

    #[test]
    fn calls_before_init_are_ignored() {
        let mut instance = loading_instance();
        instance.update();
        instance.activate();
        assert_eq!(frames(&instance), 0);
        assert_eq!(instance.phase(), LifecyclePhase::Created);
    }

    #[test]
    fn update_and_periodic_are_gated_on_visibility() {
        let mut instance = loading_instance();
        instance.init(0);
        instance.activate();
        instance.update();
        instance.periodic();
        instance.deactivate();
        instance.update();
        instance.periodic();

        let loading = instance.behavior().as_loading().unwrap();
        assert_eq!(loading.frames_visible(), 1);
        assert_eq!(loading.periods_visible(), 1);
    }

    #[test]
    fn nothing_runs_after_clear() {
        let mut instance = loading_instance();
        instance.init(0);
        instance.activate();
        instance.clear();
        instance.update();
        instance.init(1);
        instance.clear();

        assert_eq!(instance.phase(), LifecyclePhase::Cleared);
        assert_eq!(frames(&instance), 0);
        assert_eq!(instance.depth(), 0);
    }
}
