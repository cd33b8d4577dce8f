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

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use lumen_core::asset::{pending_load, AssetRef, AssetUUID, LoadError, PanelLoader, PendingLoad};
use lumen_core::ui::{ContainerId, InstanceId, PanelNode};
use tokio::runtime::Handle;

use super::PrefabLibrary;

#[derive(Debug, Default)]
struct Residency {
    resident: HashSet<AssetUUID>,
    live: HashMap<InstanceId, AssetUUID>,
}

#[derive(Debug)]
struct LoaderShared {
    library: PrefabLibrary,
    residency: Mutex<Residency>,
    next_instance: AtomicU64,
    cold_latency: Duration,
}

impl LoaderShared {
    fn residency(&self) -> MutexGuard<'_, Residency> {
        self.residency
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn instantiate(&self, asset: &AssetRef) -> Result<PanelNode, LoadError> {
        let prefab = self.library.get(asset).ok_or_else(|| LoadError::NotFound {
            address: asset.address().to_string(),
        })?;

        let id = InstanceId::new(self.next_instance.fetch_add(1, Ordering::Relaxed) + 1);
        let mut residency = self.residency();
        residency.resident.insert(asset.uuid());
        residency.live.insert(id, asset.uuid());

        Ok(PanelNode::new(id, asset.clone())
            .with_layout(prefab.layout())
            .with_elements(prefab.elements().clone()))
    }

    /// Drops an instance nobody received.
    fn forget(&self, id: InstanceId) {
        self.residency().live.remove(&id);
    }
}

/// Serves prefabs from a [`PrefabLibrary`] on a tokio runtime.
///
/// Every load is spawned on the runtime and yields at least once before it
/// completes, so a completion is never visible from inside `load_async`.
/// Assets that are not resident yet additionally wait for the configured
/// cold-load latency.
#[derive(Debug, Clone)]
pub struct TokioAssetLoader {
    handle: Handle,
    shared: Arc<LoaderShared>,
}

impl TokioAssetLoader {
    /// Creates a loader spawning onto `handle`.
    pub fn new(handle: Handle, library: PrefabLibrary) -> Self {
        Self::with_cold_latency(handle, library, Duration::ZERO)
    }

    /// Creates a loader that delays the first load of each asset by `latency`.
    pub fn with_cold_latency(handle: Handle, library: PrefabLibrary, latency: Duration) -> Self {
        log::info!(
            "TokioAssetLoader: serving {} prefabs (cold latency {:?})",
            library.len(),
            latency
        );
        Self {
            handle,
            shared: Arc::new(LoaderShared {
                library,
                residency: Mutex::new(Residency::default()),
                next_instance: AtomicU64::new(0),
                cold_latency: latency,
            }),
        }
    }

    /// Returns `true` if `asset` is kept in memory.
    pub fn is_resident(&self, asset: &AssetRef) -> bool {
        self.shared.residency().resident.contains(&asset.uuid())
    }

    /// Number of instances handed out and not yet unloaded.
    pub fn live_instances(&self) -> usize {
        self.shared.residency().live.len()
    }
}

impl PanelLoader for TokioAssetLoader {
    fn load_async(&self, asset: &AssetRef, container: ContainerId) -> PendingLoad {
        let (completer, pending) = pending_load(asset.clone());
        let shared = Arc::clone(&self.shared);
        let asset = asset.clone();

        self.handle.spawn(async move {
            tokio::task::yield_now().await;

            let cold = !shared.residency().resident.contains(&asset.uuid());
            if cold && !shared.cold_latency.is_zero() {
                tokio::time::sleep(shared.cold_latency).await;
            }

            if completer.is_abandoned() {
                log::debug!("TokioAssetLoader: '{asset}' no longer wanted, skipping");
                return;
            }

            match shared.instantiate(&asset) {
                Ok(node) => {
                    log::debug!(
                        "TokioAssetLoader: instantiated '{asset}' as {} under container {}",
                        node.id(),
                        container.0
                    );
                    if let Err(node) = completer.try_complete(node) {
                        shared.forget(node.id());
                        log::debug!("TokioAssetLoader: {} of '{asset}' abandoned on delivery", node.id());
                    }
                }
                Err(e) => completer.fail(e),
            }
        });

        pending
    }

    fn unload(&self, asset: &AssetRef, node: &PanelNode, caching: bool) {
        let mut residency = self.shared.residency();
        if residency.live.remove(&node.id()).is_none() {
            log::warn!("TokioAssetLoader: {} of '{asset}' was not live", node.id());
        }

        let uuid = asset.uuid();
        let still_used = residency.live.values().any(|live| *live == uuid);
        if !caching && !still_used && residency.resident.remove(&uuid) {
            log::debug!("TokioAssetLoader: evicted '{asset}'");
        }
    }
}
