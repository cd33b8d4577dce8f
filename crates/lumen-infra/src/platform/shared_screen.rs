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

//! A viewport source the host resizes by hand.

use std::sync::{Arc, Mutex};

use lumen_core::math::Extent2D;
use lumen_core::platform::ScreenSource;

/// A [`ScreenSource`] whose size is set by its owner.
///
/// Headless hosts and tests use it in place of a real window. Clones share
/// the same size, so the host can keep one and hand another to the game.
#[derive(Debug, Clone, Default)]
pub struct SharedScreen {
    size: Arc<Mutex<Extent2D>>,
}

impl SharedScreen {
    /// Creates a screen of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Arc::new(Mutex::new(Extent2D::new(width, height))),
        }
    }

    /// Changes the size reported from the next poll on.
    pub fn resize(&self, width: u32, height: u32) {
        log::debug!("SharedScreen: resized to {width}x{height}");
        *self.size.lock().unwrap_or_else(|p| p.into_inner()) = Extent2D::new(width, height);
    }
}

impl ScreenSource for SharedScreen {
    fn current_size(&self) -> Extent2D {
        *self.size.lock().unwrap_or_else(|p| p.into_inner())
    }
}
