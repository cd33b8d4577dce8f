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

use super::AssetRef;
use crate::ui::{ContainerId, PanelNode};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a panel load did not produce an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader has no asset registered under this address.
    #[error("no panel asset at '{address}'")]
    NotFound {
        /// The address that was requested.
        address: String,
    },
    /// The asset exists but could not be instantiated.
    #[error("failed to instantiate '{address}': {reason}")]
    Instantiate {
        /// The address that was requested.
        address: String,
        /// Loader-specific detail.
        reason: String,
    },
    /// The loader dropped the request without reporting an outcome.
    #[error("load of '{address}' was abandoned by the loader")]
    Abandoned {
        /// The address that was requested.
        address: String,
    },
    /// The caller's optional load timeout elapsed first.
    #[error("load of '{address}' timed out after {waited:?}")]
    TimedOut {
        /// The address that was requested.
        address: String,
        /// How long the request had been in flight.
        waited: Duration,
    },
}

/// The asynchronous panel loading contract.
///
/// The UI layer consumes this collaborator; it never implements it.
/// Implementations must not complete a load synchronously from inside
/// [`load_async`](Self::load_async): the caller observes completions on a
/// later tick, which is what keeps the stacking order deterministic.
pub trait PanelLoader: Send + Sync {
    /// Starts loading and instantiating `asset` under `container`.
    fn load_async(&self, asset: &AssetRef, container: ContainerId) -> PendingLoad;

    /// Releases an instance obtained from [`load_async`](Self::load_async).
    ///
    /// When `caching` is `true` the asset itself stays resident so the next
    /// load of the same address is faster.
    fn unload(&self, asset: &AssetRef, node: &PanelNode, caching: bool);
}

/// Result of polling a [`PendingLoad`].
#[derive(Debug)]
pub enum LoadPoll {
    /// No outcome has been delivered yet.
    Pending,
    /// The loader delivered an outcome.
    Ready(Result<PanelNode, LoadError>),
}

/// The caller's side of an in-flight load.
///
/// Polling never blocks; a completion is only seen when the owner polls it
/// during its own tick.
#[derive(Debug)]
pub struct PendingLoad {
    asset: AssetRef,
    receiver: oneshot::Receiver<Result<PanelNode, LoadError>>,
}

/// The loader's side of an in-flight load.
#[derive(Debug)]
pub struct LoadCompleter {
    asset: AssetRef,
    sender: oneshot::Sender<Result<PanelNode, LoadError>>,
}

/// Creates a connected completer/pending pair for `asset`.
pub fn pending_load(asset: AssetRef) -> (LoadCompleter, PendingLoad) {
    let (sender, receiver) = oneshot::channel();
    (
        LoadCompleter {
            asset: asset.clone(),
            sender,
        },
        PendingLoad { asset, receiver },
    )
}

impl PendingLoad {
    /// The asset this load was started for.
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    /// Checks for a delivered outcome without blocking.
    ///
    /// A completer that was dropped without reporting yields
    /// [`LoadError::Abandoned`].
    pub fn poll(&mut self) -> LoadPoll {
        match self.receiver.try_recv() {
            Ok(outcome) => LoadPoll::Ready(outcome),
            Err(oneshot::error::TryRecvError::Empty) => LoadPoll::Pending,
            Err(oneshot::error::TryRecvError::Closed) => {
                LoadPoll::Ready(Err(LoadError::Abandoned {
                    address: self.asset.address().to_string(),
                }))
            }
        }
    }

    /// Gives up on the load and returns a node that was already delivered.
    ///
    /// The channel is closed before it is read, so any delivery attempted
    /// afterwards fails on the loader's side instead of being lost. A
    /// returned node is owned by the caller, which must release it.
    pub fn abandon(mut self) -> Option<PanelNode> {
        self.receiver.close();
        match self.receiver.try_recv() {
            Ok(Ok(node)) => Some(node),
            _ => None,
        }
    }
}

impl LoadCompleter {
    /// The asset this completer reports for.
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    /// Returns `true` if the caller has already given up on the load.
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }

    /// Delivers a successfully instantiated node.
    pub fn complete(self, node: PanelNode) {
        if let Err(node) = self.try_complete(node) {
            log::debug!("Load outcome for '{}' dropped: the caller is gone.", node.asset());
        }
    }

    /// Delivers a node, handing it back if the caller is gone.
    ///
    /// # Errors
    /// Returns the undelivered node; the loader still owns it.
    pub fn try_complete(self, node: PanelNode) -> Result<(), PanelNode> {
        match self.sender.send(Ok(node)) {
            Err(Ok(node)) => Err(node),
            _ => Ok(()),
        }
    }

    /// Delivers a failure.
    pub fn fail(self, error: LoadError) {
        if self.sender.send(Err(error)).is_err() {
            log::debug!(
                "Load outcome for '{}' dropped: the caller is gone.",
                self.asset
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::InstanceId;

    #[test]
    fn pending_until_completed() {
        let asset = AssetRef::new("ui/title.prefab");
        let (completer, mut pending) = pending_load(asset.clone());
        assert!(matches!(pending.poll(), LoadPoll::Pending));

        completer.complete(PanelNode::new(InstanceId::new(1), asset));
        match pending.poll() {
            LoadPoll::Ready(Ok(node)) => assert_eq!(node.id(), InstanceId::new(1)),
            other => panic!("expected a node, got {other:?}"),
        }
    }

    #[test]
    fn failure_is_delivered_verbatim() {
        let (completer, mut pending) = pending_load(AssetRef::new("ui/missing.prefab"));
        completer.fail(LoadError::NotFound {
            address: "ui/missing.prefab".to_string(),
        });
        assert!(matches!(
            pending.poll(),
            LoadPoll::Ready(Err(LoadError::NotFound { .. }))
        ));
    }

    #[test]
    fn dropped_completer_reads_as_abandoned() {
        let (completer, mut pending) = pending_load(AssetRef::new("ui/title.prefab"));
        drop(completer);
        assert!(matches!(
            pending.poll(),
            LoadPoll::Ready(Err(LoadError::Abandoned { .. }))
        ));
    }

    #[test]
    fn abandon_hands_back_a_delivered_node() {
        let asset = AssetRef::new("ui/title.prefab");
        let (completer, pending) = pending_load(asset.clone());
        completer.complete(PanelNode::new(InstanceId::new(4), asset));

        let node = pending.abandon().expect("node was delivered");
        assert_eq!(node.id(), InstanceId::new(4));
    }

    #[test]
    fn delivery_after_abandon_returns_the_node_to_the_loader() {
        let asset = AssetRef::new("ui/title.prefab");
        let (completer, pending) = pending_load(asset.clone());
        assert!(pending.abandon().is_none());

        assert!(completer.is_abandoned());
        let returned = completer.try_complete(PanelNode::new(InstanceId::new(5), asset));
        assert_eq!(returned.map_err(|node| node.id()), Err(InstanceId::new(5)));
    }

    #[test]
    fn completer_sees_an_abandoned_caller() {
        let (completer, pending) = pending_load(AssetRef::new("ui/title.prefab"));
        assert!(!completer.is_abandoned());
        drop(pending);
        assert!(completer.is_abandoned());
    }
}
