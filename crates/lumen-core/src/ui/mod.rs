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

//! Provides the panel vocabulary shared by the catalog, the loader, and the
//! stack manager.
//!
//! - [`UiKind`] names a navigable panel.
//! - [`PanelDescriptor`] is the immutable catalog entry for a kind.
//! - [`PanelNode`] is what a loader instantiates: layout, canvas, and the
//!   named [`ElementTable`] of the prefab.
//! - [`PanelLifecycle`] is the hook set every panel behaviour implements.

mod descriptor;
mod element;
mod kind;
mod lifecycle;
mod node;

pub use descriptor::*;
pub use element::*;
pub use kind::*;
pub use lifecycle::*;
pub use node::*;
