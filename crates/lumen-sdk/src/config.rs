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

//! Game configuration, loaded from RON.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use lumen_agents::UiAgentConfig;
use lumen_core::ui::{ContainerId, UiKind};
use lumen_data::UiCatalog;
use lumen_lanes::sizing_lane::AspectConstraints;
use serde::{Deserialize, Serialize};

/// Fixed-aspect camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Minimum visible width in logical units.
    pub min_width: u32,
    /// Minimum visible height in logical units.
    pub min_height: u32,
    /// Lock the width axis instead of the height axis.
    pub match_width: bool,
    /// The camera's position among the screen agent's observers.
    pub priority: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let constraints = AspectConstraints::default();
        Self {
            min_width: constraints.min_width,
            min_height: constraints.min_height,
            match_width: constraints.match_width,
            priority: 0,
        }
    }
}

impl CameraConfig {
    /// The sizing constraints part of the settings.
    pub fn constraints(&self) -> AspectConstraints {
        AspectConstraints {
            min_width: self.min_width,
            min_height: self.min_height,
            match_width: self.match_width,
        }
    }
}

/// UI stack settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// The container panels are attached to.
    pub root_container: u32,
    /// Fail loads that take longer than this many milliseconds.
    pub load_timeout_ms: Option<u64>,
}

impl UiConfig {
    /// Converts to the agent's own configuration.
    pub fn agent_config(&self) -> UiAgentConfig {
        UiAgentConfig {
            root_container: ContainerId(self.root_container),
            load_timeout: self.load_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Everything a [`Game`](crate::Game) is built from.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Default `env_logger` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
    /// Milliseconds between periodic ticks.
    pub periodic_interval_ms: u64,
    /// Camera settings.
    pub camera: CameraConfig,
    /// UI stack settings.
    pub ui: UiConfig,
    /// Panels pushed when the game starts, in order.
    pub startup_panels: Vec<UiKind>,
    /// The panel catalog.
    pub catalog: UiCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            periodic_interval_ms: 1000,
            camera: CameraConfig::default(),
            ui: UiConfig::default(),
            startup_panels: Vec::new(),
            catalog: UiCatalog::new(),
        }
    }
}

impl GameConfig {
    /// Parses a RON document.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).context("Failed to parse game configuration")
    }

    /// Reads and parses a RON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read game configuration {}", path.display()))?;
        Self::from_ron_str(&text).with_context(|| format!("In {}", path.display()))
    }

    /// The periodic interval as a [`Duration`].
    pub fn periodic_interval(&self) -> Duration {
        Duration::from_millis(self.periodic_interval_ms)
    }
}
