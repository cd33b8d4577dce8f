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

use super::PanelNode;

/// The hook set every panel behaviour implements.
///
/// All hooks default to no-ops; a behaviour overrides only what it needs.
/// The stack manager's instance wrapper enforces the calling protocol:
/// `on_init` once, then any number of `on_active`/`on_inactive` toggles,
/// `on_update`/`on_periodic` only while visible, and `on_clear` once at the
/// end, after which nothing else is called.
pub trait PanelLifecycle: Send {
    /// Called once, right after the panel is attached.
    fn on_init(&mut self, _node: &mut PanelNode) {}

    /// Called when the panel becomes visible.
    fn on_active(&mut self, _node: &mut PanelNode) {}

    /// Called when the panel is hidden without being removed.
    fn on_inactive(&mut self, _node: &mut PanelNode) {}

    /// Called every tick while visible.
    fn on_update(&mut self, _node: &mut PanelNode) {}

    /// Called on every periodic (once-per-interval) tick while visible.
    fn on_periodic(&mut self, _node: &mut PanelNode) {}

    /// Called once, before the instance is destroyed.
    fn on_clear(&mut self, _node: &mut PanelNode) {}
}
