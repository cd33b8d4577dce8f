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

use lumen_core::math::Extent2D;
use lumen_core::{ObserverId, Subject};
use lumen_lanes::sizing_lane::{self, AspectConstraints};

use crate::screen_agent::ScreenAgent;

/// What the camera publishes after every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraExtent {
    /// Visible width in logical units.
    pub width: u32,
    /// Visible height in logical units.
    pub height: u32,
    /// Which axis the camera locks.
    pub match_width: bool,
    /// The viewport the extent was computed for.
    pub viewport: Extent2D,
}

impl CameraExtent {
    /// The visible extent as an [`Extent2D`].
    pub fn extent(&self) -> Extent2D {
        Extent2D::new(self.width, self.height)
    }
}

#[derive(Debug)]
struct CameraState {
    constraints: AspectConstraints,
    orthographic_size: u32,
    extent: Extent2D,
    viewport: Extent2D,
}

impl CameraState {
    fn snapshot(&self) -> CameraExtent {
        CameraExtent {
            width: self.extent.width,
            height: self.extent.height,
            match_width: self.constraints.match_width,
            viewport: self.viewport,
        }
    }
}

/// A fixed-aspect orthographic camera.
///
/// Listens to the [`ScreenAgent`] hub while enabled, refits itself on every
/// viewport change, and then notifies its own hub unconditionally.
pub struct Camera2D {
    state: Arc<Mutex<CameraState>>,
    hub: Arc<Subject<CameraExtent>>,
    priority: i32,
    registration: Option<(Arc<Subject<Extent2D>>, ObserverId)>,
}

fn lock(state: &Mutex<CameraState>) -> MutexGuard<'_, CameraState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Camera2D {
    /// Creates a disabled camera. `priority` orders it among the screen
    /// agent's observers.
    pub fn new(constraints: AspectConstraints, priority: i32) -> Self {
        Self {
            state: Arc::new(Mutex::new(CameraState {
                constraints,
                orthographic_size: 0,
                extent: Extent2D::default(),
                viewport: Extent2D::default(),
            })),
            hub: Arc::new(Subject::new()),
            priority,
            registration: None,
        }
    }

    /// The hub notified after every recompute.
    pub fn hub(&self) -> &Arc<Subject<CameraExtent>> {
        &self.hub
    }

    /// Sizes the camera for the monitor's current viewport and starts
    /// following it.
    pub fn enable(&mut self, screen: &ScreenAgent) {
        if self.registration.is_some() {
            self.disable();
        }

        Self::refit(&self.state, &self.hub, screen.current_size());

        let state = Arc::clone(&self.state);
        let hub = Arc::clone(&self.hub);
        let id = screen.hub().register_fn(self.priority, move |viewport: &Extent2D| {
            Self::refit(&state, &hub, *viewport);
        });
        self.registration = Some((Arc::clone(screen.hub()), id));
        log::debug!("Camera2D: enabled as {id}");
    }

    /// Stops following the viewport. The last extent is kept.
    pub fn disable(&mut self) {
        if let Some((screen_hub, id)) = self.registration.take() {
            screen_hub.unregister(id);
            log::debug!("Camera2D: disabled ({id})");
        }
    }

    /// Returns `true` while the camera follows a screen agent.
    pub fn is_enabled(&self) -> bool {
        self.registration.is_some()
    }

    /// Replaces the constraints, then refits and notifies immediately.
    pub fn set_config(&self, constraints: AspectConstraints) {
        let viewport = {
            let mut state = lock(&self.state);
            state.constraints = constraints;
            state.viewport
        };
        Self::refit(&self.state, &self.hub, viewport);
    }

    /// The current constraints.
    pub fn config(&self) -> AspectConstraints {
        lock(&self.state).constraints
    }

    /// The last computed half extent.
    pub fn orthographic_size(&self) -> u32 {
        lock(&self.state).orthographic_size
    }

    /// The last computed visible extent.
    pub fn extent(&self) -> Extent2D {
        lock(&self.state).extent
    }

    /// The state observers receive.
    pub fn snapshot(&self) -> CameraExtent {
        lock(&self.state).snapshot()
    }

    fn refit(state: &Mutex<CameraState>, hub: &Subject<CameraExtent>, viewport: Extent2D) {
        if viewport.is_degenerate() {
            log::warn!(
                "Camera2D: ignoring {}x{} viewport, keeping the previous extent",
                viewport.width,
                viewport.height
            );
            return;
        }

        let snapshot = {
            let mut state = lock(state);
            match sizing_lane::fit(viewport, &state.constraints) {
                Ok(fit) => {
                    state.orthographic_size = fit.orthographic_size;
                    state.extent = fit.extent;
                    state.viewport = viewport;
                }
                Err(e) => {
                    log::warn!("Camera2D: {e}; keeping the previous extent");
                    return;
                }
            }
            state.snapshot()
        };

        log::debug!(
            "Camera2D: extent {}x{} for viewport {}x{}",
            snapshot.width,
            snapshot.height,
            viewport.width,
            viewport.height
        );
        hub.notify(&snapshot);
    }
}

impl Drop for Camera2D {
    fn drop(&mut self) {
        self.disable();
    }
}
