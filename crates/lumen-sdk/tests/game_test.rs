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

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use lumen_core::math::Extent2D;
use lumen_core::ui::UiKind;
use lumen_data::panels::CAPTION_ELEMENT;
use lumen_infra::{Prefab, PrefabLibrary, SharedScreen, TokioAssetLoader};
use lumen_sdk::{Game, GameConfig};
use tokio::runtime::Runtime;

const CONFIG: &str = r#"(
    periodic_interval_ms: 0,
    camera: (min_width: 640, min_height: 960),
    startup_panels: [Loading],
    catalog: [
        (
            kind: Loading,
            full_screen: true,
            asset: "ui/loading.prefab",
            behavior: Loading(caption: "Lumen Studio"),
        ),
        (kind: Title, full_screen: true, caching: true, asset: "ui/title.prefab"),
        (kind: Toast, asset: "ui/toast.prefab"),
    ],
)"#;

struct Harness {
    _runtime: Runtime,
    screen: SharedScreen,
    loader: TokioAssetLoader,
    game: Game,
}

fn setup() -> Result<Harness> {
    let runtime = Runtime::new()?;
    let library = PrefabLibrary::new()
        .with(Prefab::new("ui/loading.prefab").with_text(CAPTION_ELEMENT, "Canvas/Company", ""))
        .with(Prefab::new("ui/title.prefab"));
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library);
    let screen = SharedScreen::new(1920, 1080);

    let config = GameConfig::from_ron_str(CONFIG)?;
    let game = Game::new(&config, Arc::new(screen.clone()), Arc::new(loader.clone()))?;
    Ok(Harness {
        _runtime: runtime,
        screen,
        loader,
        game,
    })
}

/// Ticks until nothing is queued or loading.
fn settle(game: &mut Game) -> Result<()> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        game.tick();
        if !game.ui().is_loading() && game.ui().queued().count() == 0 {
            return Ok(());
        }
        if Instant::now() > deadline {
            bail!("UI never settled");
        }
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn startup_panels_are_shown() -> Result<()> {
    let mut h = setup()?;
    settle(&mut h.game)?;

    let top = h.game.ui().top().expect("loading panel attached");
    assert_eq!(top.kind(), UiKind::Loading);
    assert_eq!(top.node().elements.text(CAPTION_ELEMENT), Some("Lumen Studio"));
    assert!(top.behavior().as_loading().unwrap().periods_visible() > 0);
    Ok(())
}

#[test]
fn unknown_startup_panel_is_an_error() {
    let runtime = Runtime::new().unwrap();
    let loader = TokioAssetLoader::new(runtime.handle().clone(), PrefabLibrary::new());
    let config = GameConfig {
        startup_panels: vec![UiKind::Shop],
        ..GameConfig::default()
    };
    let result = Game::new(&config, Arc::new(SharedScreen::new(800, 600)), Arc::new(loader));
    assert!(result.is_err());
}

#[test]
fn resize_propagates_to_camera_and_canvas() -> Result<()> {
    let mut h = setup()?;
    h.game.add_canvas("hud");
    assert_eq!(h.game.camera().extent(), Extent2D::new(1706, 960));

    h.screen.resize(1080, 1920);
    h.game.tick();

    assert_eq!(h.game.screen().current_size(), Extent2D::new(1080, 1920));
    assert_eq!(h.game.camera().extent(), Extent2D::new(640, 1138));
    let scale = h.game.canvases()[0].scale().expect("canvas laid out");
    assert_eq!(scale.reference_resolution, Extent2D::new(640, 1138));
    Ok(())
}

#[test]
fn navigation_round_trip() -> Result<()> {
    let mut h = setup()?;
    settle(&mut h.game)?;

    h.game.push(UiKind::Title)?;
    settle(&mut h.game)?;
    assert!(!h.game.ui().find(UiKind::Loading).unwrap().is_active());
    assert!(h.game.ui().find(UiKind::Title).unwrap().is_active());

    assert!(h.game.pop(UiKind::Title));
    assert!(h.game.ui().find(UiKind::Loading).unwrap().is_active());
    assert!(h.loader.is_resident(&"ui/title.prefab".into()));
    Ok(())
}

#[test]
fn missing_prefab_is_reported_and_skipped() -> Result<()> {
    let mut h = setup()?;
    settle(&mut h.game)?;
    h.game.drain_ui_events();

    h.game.push(UiKind::Toast)?;
    settle(&mut h.game)?;

    let events = h.game.drain_ui_events();
    assert!(matches!(
        events.as_slice(),
        [lumen_agents::UiEvent::Failed {
            kind: UiKind::Toast,
            ..
        }]
    ));
    assert_eq!(h.game.ui().stack().len(), 1);
    Ok(())
}

#[test]
fn clear_releases_everything() -> Result<()> {
    let mut h = setup()?;
    settle(&mut h.game)?;
    h.game.add_canvas("hud");

    h.game.clear();

    assert!(h.game.ui().stack().is_empty());
    assert_eq!(h.loader.live_instances(), 0);
    assert!(h.game.screen().hub().is_empty());
    assert!(h.game.camera().hub().is_empty());
    assert_eq!(h.game.assets().released(), 1);
    Ok(())
}

#[test]
fn clear_releases_a_delivered_but_unattached_panel() -> Result<()> {
    let mut h = setup()?;
    settle(&mut h.game)?;
    assert_eq!(h.loader.live_instances(), 1);

    h.game.push(UiKind::Title)?;
    h.game.tick();
    assert_eq!(h.game.ui().loading_kind(), Some(UiKind::Title));

    let deadline = Instant::now() + Duration::from_secs(5);
    while h.loader.live_instances() < 2 {
        if Instant::now() > deadline {
            bail!("title was never delivered");
        }
        thread::sleep(Duration::from_millis(1));
    }

    h.game.clear();

    assert!(h.game.ui().stack().is_empty());
    assert_eq!(h.loader.live_instances(), 0);
    assert_eq!(h.game.assets().released(), 2);
    Ok(())
}
