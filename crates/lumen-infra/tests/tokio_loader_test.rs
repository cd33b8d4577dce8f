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

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use lumen_core::asset::{AssetRef, LoadError, LoadPoll, PanelLoader, PendingLoad};
use lumen_core::ui::{ContainerId, PanelNode};
use lumen_infra::{Prefab, PrefabLibrary, TokioAssetLoader};
use tokio::runtime::Runtime;

fn library() -> PrefabLibrary {
    PrefabLibrary::new()
        .with(Prefab::new("ui/title.prefab").with_text("headline", "Canvas/Headline", "Lumen"))
        .with(Prefab::new("ui/shop.prefab").with_image("banner", "Canvas/Banner", "shop_banner"))
}

fn wait(mut pending: PendingLoad) -> Result<Result<PanelNode, LoadError>> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let LoadPoll::Ready(outcome) = pending.poll() {
            return Ok(outcome);
        }
        if Instant::now() > deadline {
            bail!("load of '{}' never completed", pending.asset());
        }
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn load_instantiates_the_prefab() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library());
    let asset = AssetRef::new("ui/title.prefab");

    let node = wait(loader.load_async(&asset, ContainerId(0)))??;
    assert_eq!(node.asset(), &asset);
    assert_eq!(node.elements.text("headline"), Some("Lumen"));
    assert!(loader.is_resident(&asset));
    assert_eq!(loader.live_instances(), 1);
    Ok(())
}

#[test]
fn instances_get_distinct_ids() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library());
    let asset = AssetRef::new("ui/shop.prefab");

    let first = wait(loader.load_async(&asset, ContainerId(0)))??;
    let second = wait(loader.load_async(&asset, ContainerId(0)))??;
    assert_ne!(first.id(), second.id());
    Ok(())
}

#[test]
fn unknown_address_fails_with_not_found() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library());

    let outcome = wait(loader.load_async(&AssetRef::new("ui/missing.prefab"), ContainerId(0)))?;
    assert_eq!(
        outcome,
        Err(LoadError::NotFound {
            address: "ui/missing.prefab".to_string()
        })
    );
    Ok(())
}

#[test]
fn load_never_completes_synchronously() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::with_cold_latency(
        runtime.handle().clone(),
        library(),
        Duration::from_millis(50),
    );

    let mut pending = loader.load_async(&AssetRef::new("ui/title.prefab"), ContainerId(0));
    assert!(matches!(pending.poll(), LoadPoll::Pending));
    assert!(wait(pending)?.is_ok());
    Ok(())
}

#[test]
fn unload_honors_the_cache_policy() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library());
    let title = AssetRef::new("ui/title.prefab");
    let shop = AssetRef::new("ui/shop.prefab");

    let title_node = wait(loader.load_async(&title, ContainerId(0)))??;
    let shop_node = wait(loader.load_async(&shop, ContainerId(0)))??;

    loader.unload(&title, &title_node, true);
    loader.unload(&shop, &shop_node, false);

    assert!(loader.is_resident(&title));
    assert!(!loader.is_resident(&shop));
    assert_eq!(loader.live_instances(), 0);
    Ok(())
}

#[test]
fn abandoned_loads_leave_no_live_instance() -> Result<()> {
    let runtime = Runtime::new()?;
    let loader = TokioAssetLoader::new(runtime.handle().clone(), library());
    let title = AssetRef::new("ui/title.prefab");

    for _ in 0..32 {
        drop(loader.load_async(&title, ContainerId(0)));
    }
    let kept = wait(loader.load_async(&title, ContainerId(0)))??;
    thread::sleep(Duration::from_millis(50));

    assert_eq!(loader.live_instances(), 1);
    loader.unload(&title, &kept, false);
    assert_eq!(loader.live_instances(), 0);
    Ok(())
}
