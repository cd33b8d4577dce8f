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

//! Fits a logical camera extent to the device viewport.
//!
//! The fit guarantees at least `min_width × min_height` logical units are
//! visible, and is driven by whichever axis is locked. The algorithm works in
//! whole units: every intermediate division is rounded half away from zero,
//! and the half extent is re-derived before doubling, so results are
//! reproducible bit for bit across platforms.

mod fixed_aspect;

pub use fixed_aspect::*;
