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

use lumen_core::math::Extent2D;

/// The axis a screen-scaled canvas matches against its reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchAxis {
    /// Scale follows the viewport width.
    Width,
    /// Scale follows the viewport height.
    Height,
}

impl MatchAxis {
    /// Maps the camera's locked axis to a match axis.
    pub fn from_match_width(match_width: bool) -> Self {
        if match_width {
            Self::Width
        } else {
            Self::Height
        }
    }

    /// The blend index (0 = width, 1 = height).
    pub fn index(self) -> u8 {
        match self {
            Self::Width => 0,
            Self::Height => 1,
        }
    }
}

/// The layout a canvas applies after a camera change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScale {
    /// Logical resolution the canvas is authored against.
    pub reference_resolution: Extent2D,
    /// Which axis drives the scale.
    pub match_axis: MatchAxis,
    /// Device pixels per logical unit along the matched axis.
    pub scale_factor: f32,
}

/// Computes the canvas scale for a camera `extent` shown on `viewport`.
///
/// A degenerate reference resolution yields a scale factor of `1.0`.
pub fn canvas_scale(extent: Extent2D, match_width: bool, viewport: Extent2D) -> CanvasScale {
    let match_axis = MatchAxis::from_match_width(match_width);
    let (device, reference) = match match_axis {
        MatchAxis::Width => (viewport.width, extent.width),
        MatchAxis::Height => (viewport.height, extent.height),
    };
    let scale_factor = if reference == 0 {
        1.0
    } else {
        device as f32 / reference as f32
    };

    CanvasScale {
        reference_resolution: extent,
        match_axis,
        scale_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn height_locked_matches_height() {
        let scale = canvas_scale(Extent2D::new(1706, 960), false, Extent2D::new(1920, 1080));
        assert_eq!(scale.match_axis.index(), 1);
        assert_eq!(scale.reference_resolution, Extent2D::new(1706, 960));
        assert_relative_eq!(scale.scale_factor, 1.125);
    }

    #[test]
    fn width_locked_matches_width() {
        let scale = canvas_scale(Extent2D::new(640, 1138), true, Extent2D::new(1080, 1920));
        assert_eq!(scale.match_axis, MatchAxis::Width);
        assert_eq!(scale.match_axis.index(), 0);
        assert_relative_eq!(scale.scale_factor, 1080.0 / 640.0);
    }

    #[test]
    fn degenerate_reference_keeps_unit_scale() {
        let scale = canvas_scale(Extent2D::new(0, 0), true, Extent2D::new(800, 600));
        assert_relative_eq!(scale.scale_factor, 1.0);
    }
}
