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

//! Provides structs for representing extents (sizes) and rect offsets.
//!
//! Extents use integer (`u32`) components, making them suitable for pixel
//! sizes such as the device viewport or a computed camera extent. Offsets and
//! positions are floating point, matching how rect layouts are authored.

use serde::{Deserialize, Serialize};

/// A two-dimensional extent, representing width and height.
///
/// This is used for the device viewport and for logical camera extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates an extent from its two components.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either component is zero.
    ///
    /// A degenerate extent cannot be used as a divisor by the sizing lanes.
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `width / height`, or `None` for a zero height.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.height != 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// A two-dimensional offset, used for rect edge insets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset2D {
    /// The x component.
    pub x: f32,
    /// The y component.
    pub y: f32,
}

impl Offset2D {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates an offset from its two components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A three-dimensional position relative to a parent container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3D {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
    /// The z coordinate.
    pub z: f32,
}

impl Position3D {
    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a position from its three components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_extents() {
        assert!(Extent2D::default().is_degenerate());
        assert!(Extent2D::new(0, 1080).is_degenerate());
        assert!(Extent2D::new(1920, 0).is_degenerate());
        assert!(!Extent2D::new(1920, 1080).is_degenerate());
    }

    #[test]
    fn aspect_ratio_guards_zero_height() {
        assert_eq!(Extent2D::new(1920, 0).aspect_ratio(), None);
        let ratio = Extent2D::new(1920, 1080).aspect_ratio().unwrap();
        assert!((ratio - 16.0 / 9.0).abs() < 1e-6);
    }
}
