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

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use lumen_core::agent::{Agent, AgentId};
use lumen_core::asset::{LoadError, LoadPoll, PendingLoad};
use lumen_core::ui::{ContainerId, PanelDescriptor, PanelNode, UiKind};
use lumen_core::EventBus;
use lumen_data::UiCatalog;

use super::{PanelInstance, UiError, UiEvent};
use crate::asset_agent::AssetAgent;

/// Tunables of the [`UiAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAgentConfig {
    /// The container every panel is attached to.
    pub root_container: ContainerId,
    /// Fail a load that takes longer than this. `None` waits forever.
    pub load_timeout: Option<Duration>,
}

impl Default for UiAgentConfig {
    fn default() -> Self {
        Self {
            root_container: ContainerId(0),
            load_timeout: None,
        }
    }
}

#[derive(Debug)]
struct InFlight {
    descriptor: PanelDescriptor,
    pending: PendingLoad,
    started: Instant,
}

/// Owns the visibility stack and the navigation queue.
pub struct UiAgent {
    config: UiAgentConfig,
    catalog: UiCatalog,
    assets: AssetAgent,
    queue: VecDeque<PanelDescriptor>,
    in_flight: Option<InFlight>,
    stack: Vec<PanelInstance>,
    events: EventBus<UiEvent>,
}

impl UiAgent {
    /// Creates an agent with an empty stack.
    pub fn new(catalog: UiCatalog, assets: AssetAgent, config: UiAgentConfig) -> Self {
        log::info!("UiAgent: {} panel kinds in catalog", catalog.len());
        Self {
            config,
            catalog,
            assets,
            queue: VecDeque::new(),
            in_flight: None,
            stack: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Queues `kind` for display.
    ///
    /// The request is accepted even while another load is in flight; it
    /// starts once everything queued before it has resolved.
    ///
    /// # Errors
    /// [`UiError::UnknownKind`] if the catalog has no descriptor for `kind`.
    pub fn push(&mut self, kind: UiKind) -> Result<(), UiError> {
        let descriptor = match self.catalog.lookup(kind) {
            Ok(descriptor) => descriptor.clone(),
            Err(e) => {
                log::error!("UiAgent: {e}");
                return Err(UiError::UnknownKind(kind));
            }
        };
        log::debug!("UiAgent: queued {kind}");
        self.queue.push_back(descriptor);
        Ok(())
    }

    /// Removes the topmost panel of `kind` and releases it.
    ///
    /// Returns `false` without doing anything if no such panel is stacked.
    /// Queued or loading requests for `kind` are not affected.
    pub fn pop(&mut self, kind: UiKind) -> bool {
        let Some(index) = self.stack.iter().rposition(|p| p.kind() == kind) else {
            log::debug!("UiAgent: pop({kind}) ignored, not on the stack");
            return false;
        };

        let mut instance = self.stack.remove(index);
        if instance.is_full_screen() && instance.is_active() {
            if let Some(below) = self.stack[..index]
                .iter_mut()
                .rev()
                .find(|p| p.is_full_screen())
            {
                log::debug!("UiAgent: {} visible again", below.kind());
                below.activate();
            }
        }

        self.release(instance);
        true
    }

    /// Pops every panel top-down and abandons queued and in-flight requests.
    pub fn clear_stack(&mut self) {
        self.queue.clear();
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("UiAgent: abandoning load of {}", in_flight.descriptor.kind);
            let descriptor = in_flight.descriptor;
            if let Some(node) = in_flight.pending.abandon() {
                self.assets.unload(&descriptor.asset, &node, descriptor.caching);
            }
        }
        while let Some(instance) = self.stack.pop() {
            self.release(instance);
        }
    }

    /// The visibility stack, bottom first.
    pub fn stack(&self) -> &[PanelInstance] {
        &self.stack
    }

    /// The topmost panel.
    pub fn top(&self) -> Option<&PanelInstance> {
        self.stack.last()
    }

    /// The topmost panel of `kind`.
    pub fn find(&self, kind: UiKind) -> Option<&PanelInstance> {
        self.stack.iter().rev().find(|p| p.kind() == kind)
    }

    /// Requests waiting behind the in-flight load, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = UiKind> + '_ {
        self.queue.iter().map(|d| d.kind)
    }

    /// Returns `true` while a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The kind currently loading.
    pub fn loading_kind(&self) -> Option<UiKind> {
        self.in_flight.as_ref().map(|f| f.descriptor.kind)
    }

    /// The outcome channel.
    pub fn events(&self) -> &EventBus<UiEvent> {
        &self.events
    }

    /// The catalog requests are validated against.
    pub fn catalog(&self) -> &UiCatalog {
        &self.catalog
    }

    /// The agent's tunables.
    pub fn config(&self) -> &UiAgentConfig {
        &self.config
    }

    fn release(&mut self, mut instance: PanelInstance) {
        let descriptor = instance.descriptor();
        self.assets
            .unload(&descriptor.asset, instance.node(), descriptor.caching);
        instance.clear();
        log::debug!("UiAgent: popped {}", instance.kind());
        self.events.publish(UiEvent::Popped {
            kind: instance.kind(),
            instance: instance.node().id(),
        });
    }

    fn resolve_in_flight(&mut self) {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return;
        };

        let ready = match in_flight.pending.poll() {
            LoadPoll::Ready(outcome) => Some(outcome),
            LoadPoll::Pending => None,
        };
        let overdue = self
            .config
            .load_timeout
            .is_some_and(|limit| in_flight.started.elapsed() >= limit);
        if ready.is_none() && !overdue {
            return;
        }

        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        let descriptor = in_flight.descriptor;
        let outcome = match ready {
            Some(outcome) => outcome,
            // A node delivered since the poll above still counts.
            None => match in_flight.pending.abandon() {
                Some(node) => Ok(node),
                None => Err(LoadError::TimedOut {
                    address: descriptor.asset.address().to_string(),
                    waited: in_flight.started.elapsed(),
                }),
            },
        };

        match outcome {
            Ok(node) => self.attach(descriptor, node),
            Err(error) => {
                log::warn!("UiAgent: failed to load {}: {error}", descriptor.kind);
                self.events.publish(UiEvent::Failed {
                    kind: descriptor.kind,
                    error,
                });
            }
        }
    }

    fn attach(&mut self, descriptor: PanelDescriptor, mut node: PanelNode) {
        node.layout.fill(self.config.root_container);

        let depth = self.stack.len();
        let mut instance = PanelInstance::new(descriptor, node);
        instance.init(depth);

        if instance.is_full_screen() {
            if let Some(below) = self
                .stack
                .iter_mut()
                .rev()
                .find(|p| p.is_full_screen() && p.is_active())
            {
                log::debug!("UiAgent: {} hidden by {}", below.kind(), instance.kind());
                below.deactivate();
            }
        }
        instance.activate();

        log::debug!("UiAgent: attached {} at depth {depth}", instance.kind());
        self.events.publish(UiEvent::Attached {
            kind: instance.kind(),
            instance: instance.node().id(),
            depth,
        });
        self.stack.push(instance);
    }

    fn start_next(&mut self) {
        let Some(descriptor) = self.queue.pop_front() else {
            return;
        };

        log::debug!("UiAgent: loading {}", descriptor.kind);
        let pending = self
            .assets
            .load(&descriptor.asset, self.config.root_container);
        self.in_flight = Some(InFlight {
            descriptor,
            pending,
            started: Instant::now(),
        });
    }
}

impl Agent for UiAgent {
    fn id(&self) -> AgentId {
        AgentId::Ui
    }

    fn update(&mut self) {
        self.resolve_in_flight();

        for instance in &mut self.stack {
            instance.update();
        }

        if self.in_flight.is_none() {
            self.start_next();
        }
    }

    fn periodic(&mut self) {
        for instance in &mut self.stack {
            instance.periodic();
        }
    }

    fn clear(&mut self) {
        self.clear_stack();
    }
}
