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

//! The owning game context.

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_agents::{AssetAgent, Camera2D, CanvasScaler, ScreenAgent, UiAgent, UiError, UiEvent};
use lumen_core::agent::Agent;
use lumen_core::asset::PanelLoader;
use lumen_core::platform::ScreenSource;
use lumen_core::ui::UiKind;

use crate::{GameConfig, PeriodicClock};

/// Owns and wires every agent of a running game.
///
/// There is exactly one of these per game, created by the host and passed
/// around explicitly. Agents reach each other only through the handles the
/// context wires at construction.
pub struct Game {
    screen: ScreenAgent,
    assets: AssetAgent,
    ui: UiAgent,
    camera: Camera2D,
    canvases: Vec<CanvasScaler>,
    clock: PeriodicClock,
    frame_count: u64,
}

impl Game {
    /// Builds the agents from `config`, then pushes the startup panels.
    ///
    /// # Errors
    /// Fails if a startup panel has no catalog entry.
    pub fn new(
        config: &GameConfig,
        screen: Arc<dyn ScreenSource>,
        loader: Arc<dyn PanelLoader>,
    ) -> Result<Self> {
        log::info!("Initializing Lumen game context...");

        let screen = ScreenAgent::new(screen);
        let assets = AssetAgent::new(loader);
        let ui = UiAgent::new(config.catalog.clone(), assets.clone(), config.ui.agent_config());

        let mut camera = Camera2D::new(config.camera.constraints(), config.camera.priority);
        camera.enable(&screen);

        let mut game = Self {
            screen,
            assets,
            ui,
            camera,
            canvases: Vec::new(),
            clock: PeriodicClock::new(config.periodic_interval()),
            frame_count: 0,
        };

        for kind in &config.startup_panels {
            game.push(*kind)
                .with_context(|| format!("Invalid startup panel {kind}"))?;
        }

        log::info!("Lumen game context ready.");
        Ok(game)
    }

    /// Adds a canvas that follows the camera and returns it.
    pub fn add_canvas(&mut self, name: &str) -> &CanvasScaler {
        let mut canvas = CanvasScaler::new(name);
        canvas.enable(&self.camera, 0);
        let index = self.canvases.len();
        self.canvases.push(canvas);
        &self.canvases[index]
    }

    fn agents_mut(&mut self) -> [&mut dyn Agent; 3] {
        [&mut self.screen, &mut self.assets, &mut self.ui]
    }

    /// Runs one frame: every agent in order, then the periodic loop when
    /// its interval has elapsed.
    pub fn tick(&mut self) {
        for agent in self.agents_mut() {
            agent.update();
        }

        if self.clock.tick() {
            for agent in self.agents_mut() {
                agent.periodic();
            }
        }
        self.frame_count += 1;
    }

    /// Queues a panel. See [`UiAgent::push`].
    pub fn push(&mut self, kind: UiKind) -> Result<(), UiError> {
        self.ui.push(kind)
    }

    /// Removes the topmost panel of `kind`. See [`UiAgent::pop`].
    pub fn pop(&mut self, kind: UiKind) -> bool {
        self.ui.pop(kind)
    }

    /// Takes every UI outcome published since the last call.
    pub fn drain_ui_events(&self) -> Vec<UiEvent> {
        self.ui.events().drain()
    }

    /// Releases every panel and detaches every observer.
    ///
    /// The UI goes first so its releases still reach the asset agent.
    pub fn clear(&mut self) {
        log::info!("Clearing Lumen game context...");
        for canvas in &mut self.canvases {
            canvas.disable();
        }
        self.camera.disable();

        let [screen, assets, ui] = self.agents_mut();
        for agent in [ui, assets, screen] {
            agent.clear();
        }
    }

    /// The resolution monitor.
    pub fn screen(&self) -> &ScreenAgent {
        &self.screen
    }

    /// The resources manager.
    pub fn assets(&self) -> &AssetAgent {
        &self.assets
    }

    /// The UI stack manager.
    pub fn ui(&self) -> &UiAgent {
        &self.ui
    }

    /// Mutable access to the UI stack manager.
    pub fn ui_mut(&mut self) -> &mut UiAgent {
        &mut self.ui
    }

    /// The fixed-aspect camera.
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// The canvases following the camera, in creation order.
    pub fn canvases(&self) -> &[CanvasScaler] {
        &self.canvases
    }

    /// Frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
