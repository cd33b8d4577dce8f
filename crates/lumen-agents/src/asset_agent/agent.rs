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

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lumen_core::agent::{Agent, AgentId};
use lumen_core::asset::{AssetRef, PanelLoader, PendingLoad};
use lumen_core::ui::{ContainerId, PanelNode};

#[derive(Debug, Default)]
struct AssetStats {
    started: AtomicU64,
    released: AtomicU64,
}

/// The resources manager: starts and releases panel loads.
#[derive(Clone)]
pub struct AssetAgent {
    loader: Arc<dyn PanelLoader>,
    stats: Arc<AssetStats>,
}

impl AssetAgent {
    /// Wraps `loader`.
    pub fn new(loader: Arc<dyn PanelLoader>) -> Self {
        Self {
            loader,
            stats: Arc::new(AssetStats::default()),
        }
    }

    /// Starts loading `asset` under `container`.
    pub fn load(&self, asset: &AssetRef, container: ContainerId) -> PendingLoad {
        self.stats.started.fetch_add(1, Ordering::Relaxed);
        log::debug!("AssetAgent: loading '{asset}' into container {}", container.0);
        self.loader.load_async(asset, container)
    }

    /// Releases `node`; the asset stays resident when `caching` is `true`.
    pub fn unload(&self, asset: &AssetRef, node: &PanelNode, caching: bool) {
        self.stats.released.fetch_add(1, Ordering::Relaxed);
        log::debug!("AssetAgent: releasing {} of '{asset}' (caching={caching})", node.id());
        self.loader.unload(asset, node, caching);
    }

    /// Number of loads started so far.
    pub fn started(&self) -> u64 {
        self.stats.started.load(Ordering::Relaxed)
    }

    /// Number of instances released so far.
    pub fn released(&self) -> u64 {
        self.stats.released.load(Ordering::Relaxed)
    }
}

impl Agent for AssetAgent {
    fn id(&self) -> AgentId {
        AgentId::Asset
    }

    fn update(&mut self) {
        // Loads complete on the loader's side; the UI agent polls them.
    }

    fn periodic(&mut self) {
        log::trace!(
            "AssetAgent: {} loads started, {} instances released",
            self.started(),
            self.released()
        );
    }

    fn clear(&mut self) {
        log::info!(
            "AssetAgent: shutting down after {} loads and {} releases",
            self.started(),
            self.released()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::asset::{pending_load, LoadPoll};
    use lumen_core::ui::InstanceId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLoader {
        unloads: Mutex<Vec<(String, bool)>>,
    }

    impl PanelLoader for RecordingLoader {
        fn load_async(&self, asset: &AssetRef, _container: ContainerId) -> PendingLoad {
            let (completer, pending) = pending_load(asset.clone());
            completer.complete(PanelNode::new(InstanceId::new(7), asset.clone()));
            pending
        }

        fn unload(&self, asset: &AssetRef, _node: &PanelNode, caching: bool) {
            self.unloads
                .lock()
                .unwrap()
                .push((asset.address().to_string(), caching));
        }
    }

    #[test]
    fn counters_are_shared_between_clones() {
        let loader = Arc::new(RecordingLoader::default());
        let agent = AssetAgent::new(loader.clone());
        let clone = agent.clone();
        let asset = AssetRef::new("ui/shop.prefab");

        let mut pending = clone.load(&asset, ContainerId(0));
        let node = match pending.poll() {
            LoadPoll::Ready(Ok(node)) => node,
            other => panic!("unexpected poll result {other:?}"),
        };
        agent.unload(&asset, &node, true);

        assert_eq!(agent.started(), 1);
        assert_eq!(clone.released(), 1);
        assert_eq!(
            *loader.unloads.lock().unwrap(),
            vec![("ui/shop.prefab".to_string(), true)]
        );
    }
}
