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

//! # Lumen Infra
//!
//! Concrete implementations of the collaborators `lumen-core` only describes:
//! a tokio-backed [`PanelLoader`](lumen_core::asset::PanelLoader) serving
//! prefabs from an in-memory library, and a shared, resizable screen.

#![warn(missing_docs)]

pub mod asset;
pub mod platform;

pub use asset::{Prefab, PrefabLibrary, TokioAssetLoader};
pub use platform::SharedScreen;
