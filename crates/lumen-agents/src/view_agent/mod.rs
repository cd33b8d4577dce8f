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

//! Camera and canvas components that follow the viewport.
//!
//! The chain is resolution monitor → [`Camera2D`] → [`CanvasScaler`]. Each
//! link owns a hub and publishes a snapshot of its state after recomputing,
//! so dependents never need to lock the component that notified them.

mod camera;
mod canvas;

pub use camera::{Camera2D, CameraExtent};
pub use canvas::{CanvasRenderMode, CanvasScaler};
