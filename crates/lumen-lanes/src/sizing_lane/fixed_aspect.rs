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
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The authored constraints of a fixed-aspect camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectConstraints {
    /// Minimum logical width that must stay visible.
    pub min_width: u32,
    /// Minimum logical height that must stay visible.
    pub min_height: u32,
    /// `true` locks the width axis, `false` locks the height axis.
    pub match_width: bool,
}

impl Default for AspectConstraints {
    fn default() -> Self {
        Self {
            min_width: 640,
            min_height: 960,
            match_width: false,
        }
    }
}

/// The outcome of a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAspectFit {
    /// Half of the visible height, in logical units.
    pub orthographic_size: u32,
    /// The visible extent, in logical units.
    pub extent: Extent2D,
}

/// A fit was attempted with inputs that would divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizingError {
    /// The viewport has a zero dimension.
    #[error("cannot fit a camera to a {}x{} viewport", .0.width, .0.height)]
    DegenerateViewport(Extent2D),
    /// An intermediate size collapsed to zero and cannot be scaled up.
    #[error("fixed-aspect fit collapsed to zero for viewport {}x{}", .0.width, .0.height)]
    CollapsedExtent(Extent2D),
}

fn round_half_away(value: f64) -> u64 {
    // `f64::round` rounds half away from zero.
    value.round() as u64
}

/// Computes the half extent (orthographic size) for `viewport`.
///
/// # Errors
/// Returns [`SizingError`] instead of dividing by zero. Callers are expected
/// to never get here with a degenerate viewport.
pub fn orthographic_size(
    viewport: Extent2D,
    constraints: &AspectConstraints,
) -> Result<u32, SizingError> {
    if viewport.is_degenerate() {
        return Err(SizingError::DegenerateViewport(viewport));
    }

    let w = u64::from(viewport.width);
    let h = u64::from(viewport.height);
    let min_width = u64::from(constraints.min_width);
    let min_height = u64::from(constraints.min_height);

    let candidate = if constraints.match_width {
        let mut candidate = round_half_away((h * min_width) as f64 / w as f64);
        if candidate < min_height {
            if candidate == 0 {
                return Err(SizingError::CollapsedExtent(viewport));
            }
            let add_rate = min_height as f64 / candidate as f64;
            candidate = round_half_away(candidate as f64 * add_rate);
        }
        candidate
    } else {
        let mut candidate = min_height;
        let width = (w * min_height) / h;
        if width < min_width {
            if width == 0 {
                return Err(SizingError::CollapsedExtent(viewport));
            }
            let add_rate = min_width as f64 / width as f64;
            candidate = round_half_away(candidate as f64 * add_rate);
        }
        candidate
    };

    let half = round_half_away(candidate as f64 * 0.5);
    u32::try_from(half).map_err(|_| SizingError::CollapsedExtent(viewport))
}

/// Fits the camera to `viewport` and returns the visible extent.
///
/// The full height is re-derived from the rounded half extent rather than
/// reusing the pre-rounding candidate; the width follows from the viewport's
/// aspect ratio with integer division.
pub fn fit(viewport: Extent2D, constraints: &AspectConstraints) -> Result<FixedAspectFit, SizingError> {
    let orthographic_size = orthographic_size(viewport, constraints)?;
    let full = u64::from(orthographic_size) * 2;
    let width = (u64::from(viewport.width) * full) / u64::from(viewport.height);

    let extent = Extent2D::new(
        u32::try_from(width).map_err(|_| SizingError::CollapsedExtent(viewport))?,
        u32::try_from(full).map_err(|_| SizingError::CollapsedExtent(viewport))?,
    );
    log::trace!(
        "Fixed-aspect fit: viewport {}x{} -> extent {}x{} (half {})",
        viewport.width,
        viewport.height,
        extent.width,
        extent.height,
        orthographic_size
    );

    Ok(FixedAspectFit {
        orthographic_size,
        extent,
    })
}
