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

//! # Lumen Lanes
//!
//! Stateless, deterministic pipelines. Agents own the state and call into a
//! lane whenever their inputs change:
//! - [`sizing_lane`] fits a fixed-aspect camera extent to a viewport,
//! - [`layout_lane`] derives a canvas scale policy from that extent.

#![warn(missing_docs)]

pub mod layout_lane;
pub mod sizing_lane;
