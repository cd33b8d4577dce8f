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

//! Traits for the per-tick subsystems (Agents) the game context drives.

/// Identifies an agent, mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    /// Watches the device viewport.
    Screen,
    /// Fronts the panel asset loader.
    Asset,
    /// Owns the panel stack and the navigation queue.
    Ui,
}

/// The foundational interface for a per-tick subsystem.
///
/// The owning context calls every agent in a fixed order each tick, then
/// calls [`periodic`](Agent::periodic) once per periodic interval. All
/// mutation happens inside these calls; nothing runs concurrently with them.
pub trait Agent: Send {
    /// Returns the identifier for this agent.
    fn id(&self) -> AgentId;

    /// Advances the agent by one tick.
    fn update(&mut self);

    /// Runs the agent's once-per-interval work.
    fn periodic(&mut self) {}

    /// Releases everything the agent holds; called on shutdown.
    fn clear(&mut self) {}
}
