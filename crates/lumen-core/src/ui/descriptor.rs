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

use super::UiKind;
use crate::asset::AssetRef;
use serde::{Deserialize, Serialize};

/// Selects which built-in panel behaviour drives an instance.
///
/// The set is closed on purpose: the catalog picks one of these at load
/// time instead of the asset carrying arbitrary code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelBehaviorKind {
    /// Every lifecycle hook is a no-op.
    #[default]
    Plain,
    /// A loading screen that writes `caption` into its `company_name` text.
    Loading {
        /// Text shown by the panel.
        caption: String,
    },
}

/// The immutable catalog entry for one [`UiKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// The kind this entry describes.
    pub kind: UiKind,
    /// Keep the asset resident after the panel is popped.
    #[serde(default)]
    pub caching: bool,
    /// The panel occludes everything below it.
    #[serde(default)]
    pub full_screen: bool,
    /// The prefab the loader instantiates.
    pub asset: AssetRef,
    /// The behaviour attached to the instance once loaded.
    #[serde(default)]
    pub behavior: PanelBehaviorKind,
}

impl PanelDescriptor {
    /// Creates a plain, non-cached, windowed descriptor.
    pub fn new(kind: UiKind, asset: impl Into<AssetRef>) -> Self {
        Self {
            kind,
            caching: false,
            full_screen: false,
            asset: asset.into(),
            behavior: PanelBehaviorKind::Plain,
        }
    }

    /// Marks the panel as full-screen.
    pub fn full_screen(mut self) -> Self {
        self.full_screen = true;
        self
    }

    /// Marks the panel's asset as cached after unload.
    pub fn cached(mut self) -> Self {
        self.caching = true;
        self
    }

    /// Sets the behaviour attached at load time.
    pub fn with_behavior(mut self, behavior: PanelBehaviorKind) -> Self {
        self.behavior = behavior;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_are_omitted() {
        let text = r#"(kind: Title, asset: "ui/title.prefab")"#;
        let descriptor: PanelDescriptor = ron::from_str(text).unwrap();
        assert_eq!(descriptor, PanelDescriptor::new(UiKind::Title, "ui/title.prefab"));
    }

    #[test]
    fn loading_behavior_parses_with_caption() {
        let text = r#"(
            kind: Loading,
            full_screen: true,
            caching: true,
            asset: "ui/loading.prefab",
            behavior: Loading(caption: "EveryDay.DevUp"),
        )"#;
        let descriptor: PanelDescriptor = ron::from_str(text).unwrap();
        assert!(descriptor.full_screen && descriptor.caching);
        assert_eq!(
            descriptor.behavior,
            PanelBehaviorKind::Loading {
                caption: "EveryDay.DevUp".to_string()
            }
        );
    }
}
