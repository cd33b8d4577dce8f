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

//! Provides abstractions over the host platform.
//!
//! The navigation layer only needs one thing from the platform: the current
//! size of the drawable area, read once per tick.

use crate::math::Extent2D;

/// A provider of the current viewport size.
///
/// Any windowing backend can implement this to feed the screen agent. There
/// is no resize callback: the agent polls once per tick.
pub trait ScreenSource: Send + Sync {
    /// Returns the physical size (width, height) of the drawable area.
    fn current_size(&self) -> Extent2D;
}
