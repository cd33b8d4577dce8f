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

// Lumen Sandbox
// Headless frame loop exercising navigation and resize handling.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use lumen_infra::{Prefab, PrefabLibrary, SharedScreen, TokioAssetLoader};
use lumen_sdk::prelude::*;

const DEFAULT_CONFIG: &str = include_str!("../config/sandbox.ron");
const FRAME_TIME: Duration = Duration::from_millis(16);
const FRAMES: u64 = 240;

fn load_config() -> Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::from_path(&path),
        None => GameConfig::from_ron_str(DEFAULT_CONFIG).context("Built-in sandbox config"),
    }
}

fn prefabs() -> PrefabLibrary {
    // Toast is deliberately missing to show a failed load.
    PrefabLibrary::new()
        .with(Prefab::new("ui/loading.prefab").with_text("company_name", "Canvas/Company", ""))
        .with(Prefab::new("ui/title.prefab").with_image("logo", "Canvas/Logo", "title_logo"))
        .with(Prefab::new("ui/lobby.prefab"))
        .with(Prefab::new("ui/shop.prefab").with_text("gold", "Canvas/Wallet/Gold", "0"))
}

fn script(frame: u64, game: &mut Game, screen: &SharedScreen) -> Result<()> {
    match frame {
        30 => screen.resize(1080, 1920),
        45 => game.push(UiKind::Title)?,
        90 => {
            game.push(UiKind::Shop)?;
            game.push(UiKind::Toast)?;
        }
        140 => {
            game.pop(UiKind::Shop);
        }
        160 => game.push(UiKind::Lobby)?,
        200 => {
            game.pop(UiKind::Lobby);
        }
        220 => screen.resize(2560, 1440),
        _ => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let config = load_config()?;
    Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str())).init();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start the loader runtime")?;
    let loader = TokioAssetLoader::with_cold_latency(
        runtime.handle().clone(),
        prefabs(),
        Duration::from_millis(120),
    );
    let screen = SharedScreen::new(1920, 1080);

    let mut game = Game::new(&config, Arc::new(screen.clone()), Arc::new(loader))?;
    game.add_canvas("hud");

    for frame in 0..FRAMES {
        script(frame, &mut game, &screen)?;
        game.tick();

        for event in game.drain_ui_events() {
            log::info!("UI event: {event:?}");
        }
        thread::sleep(FRAME_TIME);
    }

    let stack: Vec<String> = game.ui().stack().iter().map(|p| p.kind().to_string()).collect();
    log::info!(
        "Finished after {} frames. Camera {}x{}, stack [{}]",
        game.frame_count(),
        game.camera().extent().width,
        game.camera().extent().height,
        stack.join(", ")
    );

    game.clear();
    Ok(())
}
