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

use lumen_core::asset::LoadError;
use lumen_core::ui::{InstanceId, UiKind};
use thiserror::Error;

/// What happened to a navigation request or a stacked panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A load finished and the panel is now on the stack.
    Attached {
        /// The panel kind.
        kind: UiKind,
        /// The instance handed back by the loader.
        instance: InstanceId,
        /// Its position in the stack, 0 being the bottom.
        depth: usize,
    },
    /// A load failed; the request was dropped.
    Failed {
        /// The panel kind.
        kind: UiKind,
        /// Why the load failed.
        error: LoadError,
    },
    /// A panel left the stack and was released.
    Popped {
        /// The panel kind.
        kind: UiKind,
        /// The released instance.
        instance: InstanceId,
    },
}

/// Errors returned synchronously by the [`UiAgent`](super::UiAgent).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The catalog has no descriptor for the requested kind.
    #[error("cannot show {0}: no panel descriptor in the catalog")]
    UnknownKind(UiKind),
}
