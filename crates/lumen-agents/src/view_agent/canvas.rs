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

use std::sync::{Arc, Mutex, MutexGuard};

use lumen_core::{ObserverId, Subject};
use lumen_lanes::layout_lane::{self, CanvasScale};

use super::camera::{Camera2D, CameraExtent};

/// How a canvas is placed relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasRenderMode {
    /// Drawn over the screen at native resolution.
    #[default]
    Overlay,
    /// Drawn in camera space and scaled with the screen size.
    CameraSpace,
}

#[derive(Debug, Default)]
struct CanvasState {
    render_mode: CanvasRenderMode,
    scale: Option<CanvasScale>,
    layouts: u64,
}

/// A canvas whose reference resolution follows a [`Camera2D`].
pub struct CanvasScaler {
    name: String,
    state: Arc<Mutex<CanvasState>>,
    registration: Option<(Arc<Subject<CameraExtent>>, ObserverId)>,
}

fn lock(state: &Mutex<CanvasState>) -> MutexGuard<'_, CanvasState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl CanvasScaler {
    /// Creates a disabled canvas. `name` only shows up in logs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(CanvasState::default())),
            registration: None,
        }
    }

    /// Applies the camera's current extent, then follows its hub.
    pub fn enable(&mut self, camera: &Camera2D, priority: i32) {
        if self.registration.is_some() {
            self.disable();
        }

        Self::apply(&self.name, &self.state, &camera.snapshot());

        let name = self.name.clone();
        let state = Arc::clone(&self.state);
        let id = camera.hub().register_fn(priority, move |extent: &CameraExtent| {
            Self::apply(&name, &state, extent);
        });
        self.registration = Some((Arc::clone(camera.hub()), id));
    }

    /// Stops following the camera. The last scale is kept.
    pub fn disable(&mut self) {
        if let Some((camera_hub, id)) = self.registration.take() {
            camera_hub.unregister(id);
        }
    }

    /// Returns `true` while the canvas follows a camera.
    pub fn is_enabled(&self) -> bool {
        self.registration.is_some()
    }

    /// The last applied scale, if any layout happened yet.
    pub fn scale(&self) -> Option<CanvasScale> {
        lock(&self.state).scale
    }

    /// The current render mode.
    pub fn render_mode(&self) -> CanvasRenderMode {
        lock(&self.state).render_mode
    }

    /// How many times a layout was applied.
    pub fn layout_count(&self) -> u64 {
        lock(&self.state).layouts
    }

    fn apply(name: &str, state: &Mutex<CanvasState>, extent: &CameraExtent) {
        let scale = layout_lane::canvas_scale(extent.extent(), extent.match_width, extent.viewport);
        let mut state = lock(state);
        if state.render_mode != CanvasRenderMode::CameraSpace {
            log::debug!("CanvasScaler '{name}': switching to camera space");
            state.render_mode = CanvasRenderMode::CameraSpace;
        }
        state.scale = Some(scale);
        state.layouts += 1;
        log::trace!(
            "CanvasScaler '{name}': reference {}x{}, match {}, scale {:.3}",
            scale.reference_resolution.width,
            scale.reference_resolution.height,
            scale.match_axis.index(),
            scale.scale_factor
        );
    }
}

impl Drop for CanvasScaler {
    fn drop(&mut self) {
        self.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen_agent::ScreenAgent;
    use lumen_core::math::Extent2D;
    use lumen_core::platform::ScreenSource;
    use lumen_lanes::layout_lane::MatchAxis;
    use lumen_lanes::sizing_lane::AspectConstraints;

    struct SharedSize(Mutex<Extent2D>);

    impl ScreenSource for SharedSize {
        fn current_size(&self) -> Extent2D {
            *self.0.lock().unwrap()
        }
    }

    #[test]
    fn enable_applies_current_extent() {
        let screen = ScreenAgent::new(Arc::new(SharedSize(Mutex::new(Extent2D::new(1920, 1080)))));
        let mut camera = Camera2D::new(AspectConstraints::default(), 0);
        camera.enable(&screen);

        let mut canvas = CanvasScaler::new("hud");
        canvas.enable(&camera, 0);

        let scale = canvas.scale().unwrap();
        assert_eq!(canvas.render_mode(), CanvasRenderMode::CameraSpace);
        assert_eq!(scale.reference_resolution, Extent2D::new(1706, 960));
        assert_eq!(scale.match_axis, MatchAxis::Height);
    }

    #[test]
    fn resize_cascades_from_screen_to_canvas() {
        let size = Arc::new(SharedSize(Mutex::new(Extent2D::new(1920, 1080))));
        let mut screen = ScreenAgent::new(size.clone());
        let mut camera = Camera2D::new(AspectConstraints::default(), 0);
        camera.enable(&screen);
        let mut canvas = CanvasScaler::new("hud");
        canvas.enable(&camera, 0);

        *size.0.lock().unwrap() = Extent2D::new(1080, 1920);
        screen.poll();

        let scale = canvas.scale().unwrap();
        assert_eq!(scale.reference_resolution, Extent2D::new(640, 1138));
        assert_eq!(canvas.layout_count(), 2);
    }

    #[test]
    fn config_change_switches_match_axis() {
        let screen = ScreenAgent::new(Arc::new(SharedSize(Mutex::new(Extent2D::new(1920, 1080)))));
        let mut camera = Camera2D::new(AspectConstraints::default(), 0);
        camera.enable(&screen);
        let mut canvas = CanvasScaler::new("hud");
        canvas.enable(&camera, 0);

        camera.set_config(AspectConstraints {
            match_width: true,
            ..AspectConstraints::default()
        });
        assert_eq!(canvas.scale().unwrap().match_axis.index(), 0);

        canvas.disable();
        assert!(camera.hub().is_empty());
    }
}
