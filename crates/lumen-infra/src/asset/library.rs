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

use std::collections::HashMap;

use lumen_core::asset::{AssetRef, AssetUUID};
use lumen_core::ui::{Element, ElementKind, ElementTable, RectLayout};

/// The authored template a panel node is instantiated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    asset: AssetRef,
    layout: RectLayout,
    elements: ElementTable,
}

impl Prefab {
    /// Creates an empty prefab served under `address`.
    pub fn new(address: impl Into<AssetRef>) -> Self {
        Self {
            asset: address.into(),
            layout: RectLayout::default(),
            elements: ElementTable::new(),
        }
    }

    /// Adds a text element.
    pub fn with_text(mut self, name: &str, path: &str, content: &str) -> Self {
        self.elements = self.elements.with_text(name, path, content);
        self
    }

    /// Adds an image element showing `sprite`.
    pub fn with_image(mut self, name: &str, path: &str, sprite: &str) -> Self {
        self.elements.insert(Element {
            name: name.to_string(),
            path: path.to_string(),
            kind: ElementKind::Image(sprite.to_string()),
        });
        self
    }

    /// Sets the authored layout, before the UI agent normalizes it.
    pub fn with_layout(mut self, layout: RectLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The asset this prefab is served as.
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    /// The authored layout.
    pub fn layout(&self) -> RectLayout {
        self.layout
    }

    /// The authored elements.
    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }
}

/// Every prefab a loader can serve, keyed by asset id.
#[derive(Debug, Clone, Default)]
pub struct PrefabLibrary {
    prefabs: HashMap<AssetUUID, Prefab>,
}

impl PrefabLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a prefab.
    pub fn insert(&mut self, prefab: Prefab) {
        if self.prefabs.insert(prefab.asset().uuid(), prefab).is_some() {
            log::warn!("PrefabLibrary: replaced an existing prefab");
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, prefab: Prefab) -> Self {
        self.insert(prefab);
        self
    }

    /// Looks up the prefab for `asset`.
    pub fn get(&self, asset: &AssetRef) -> Option<&Prefab> {
        self.prefabs.get(&asset.uuid())
    }

    /// Number of prefabs.
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// Returns `true` if the library holds nothing.
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}
