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

//! Provides the asset vocabulary the UI layer speaks to its loader in.
//!
//! The core has no knowledge of how panel prefabs are stored or instantiated.
//! It only defines:
//! - stable identifiers ([`AssetUUID`], [`AssetRef`]) for panel assets,
//! - the asynchronous [`PanelLoader`] contract and the [`PendingLoad`] handle
//!   through which a load completion reaches the tick that polls it.

mod loader;
mod reference;
mod uuid;

pub use loader::*;
pub use reference::*;
pub use uuid::*;
