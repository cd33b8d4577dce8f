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

use super::ElementTable;
use crate::asset::AssetRef;
use crate::math::{Offset2D, Position3D};
use std::fmt;

/// Identifies a container (the root canvas, typically) panels attach under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContainerId(pub u32);

/// Identifies one instantiated panel object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Wraps a loader-assigned instance number.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the loader-assigned instance number.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance#{}", self.0)
    }
}

/// The rect placement of a panel inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectLayout {
    /// The container the panel is attached to, if any.
    pub parent: Option<ContainerId>,
    /// Inset of the lower-left corner from the anchors.
    pub offset_min: Offset2D,
    /// Inset of the upper-right corner from the anchors.
    pub offset_max: Offset2D,
    /// Position relative to the parent.
    pub local_position: Position3D,
}

impl RectLayout {
    /// Stretches the rect to fill `container` and resets its position.
    pub fn fill(&mut self, container: ContainerId) {
        self.parent = Some(container);
        self.offset_min = Offset2D::ZERO;
        self.offset_max = Offset2D::ZERO;
        self.local_position = Position3D::ZERO;
    }
}

/// The top-level canvas of a panel: draw order and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCanvas {
    /// Whether the panel is drawn.
    pub enabled: bool,
    /// Whether `sorting_order` overrides the inherited order.
    pub override_sorting: bool,
    /// Draw order; higher draws on top.
    pub sorting_order: i32,
}

impl Default for PanelCanvas {
    fn default() -> Self {
        Self {
            enabled: true,
            override_sorting: false,
            sorting_order: 0,
        }
    }
}

/// An instantiated panel object, as handed back by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelNode {
    id: InstanceId,
    asset: AssetRef,
    /// Placement inside the container.
    pub layout: RectLayout,
    /// Draw order and visibility.
    pub canvas: PanelCanvas,
    /// Named elements of the prefab.
    pub elements: ElementTable,
}

impl PanelNode {
    /// Creates an empty node for `asset`.
    pub fn new(id: InstanceId, asset: AssetRef) -> Self {
        Self {
            id,
            asset,
            layout: RectLayout::default(),
            canvas: PanelCanvas::default(),
            elements: ElementTable::default(),
        }
    }

    /// Replaces the element table.
    pub fn with_elements(mut self, elements: ElementTable) -> Self {
        self.elements = elements;
        self
    }

    /// Replaces the authored layout.
    pub fn with_layout(mut self, layout: RectLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The loader-assigned instance id.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The asset this node was instantiated from.
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }
}
