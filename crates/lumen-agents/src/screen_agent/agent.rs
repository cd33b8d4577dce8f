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

use lumen_core::agent::{Agent, AgentId};
use lumen_core::math::Extent2D;
use lumen_core::platform::ScreenSource;
use lumen_core::Subject;

/// Watches the device viewport and reports changes.
pub struct ScreenAgent {
    source: Arc<dyn ScreenSource>,
    current: Extent2D,
    hub: Arc<Subject<Extent2D>>,
}

impl ScreenAgent {
    /// Creates the agent and polls the source once.
    pub fn new(source: Arc<dyn ScreenSource>) -> Self {
        let mut agent = Self {
            source,
            current: Extent2D::default(),
            hub: Arc::new(Subject::new()),
        };
        agent.poll();
        agent
    }

    /// The last viewport seen by [`poll`](Self::poll).
    pub fn current_size(&self) -> Extent2D {
        self.current
    }

    /// The hub notified with the new extent on every change.
    pub fn hub(&self) -> &Arc<Subject<Extent2D>> {
        &self.hub
    }

    /// Reads the source and notifies if either dimension changed.
    ///
    /// The stored extent is updated before observers run, so an observer
    /// that queries the agent sees the new size. Returns `true` on change.
    pub fn poll(&mut self) -> bool {
        let size = self.source.current_size();
        if size == self.current {
            return false;
        }

        log::info!(
            "ScreenAgent: viewport changed {}x{} -> {}x{}",
            self.current.width,
            self.current.height,
            size.width,
            size.height
        );
        self.current = size;
        self.hub.notify(&size);
        true
    }
}

impl Agent for ScreenAgent {
    fn id(&self) -> AgentId {
        AgentId::Screen
    }

    fn update(&mut self) {
        self.poll();
    }

    fn clear(&mut self) {
        self.hub.reset();
    }
}
