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

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A globally unique, persistent identifier for a logical asset.
///
/// Panel assets are authored by address; the UUID is derived from that
/// address (version 5), so the same address always yields the same id no
/// matter which process computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetUUID(Uuid);

impl AssetUUID {
    /// Derives a stable (version 5) `AssetUUID` from an asset address.
    pub fn new_v5(address: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_URL, address.as_bytes()))
    }
}

impl fmt::Display for AssetUUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v5_is_stable_per_address() {
        assert_eq!(
            AssetUUID::new_v5("ui/loading.prefab"),
            AssetUUID::new_v5("ui/loading.prefab")
        );
        assert_ne!(
            AssetUUID::new_v5("ui/loading.prefab"),
            AssetUUID::new_v5("ui/title.prefab")
        );
    }

    #[test]
    fn ids_are_version_5() {
        assert_eq!(AssetUUID::new_v5("ui/shop.prefab").0.get_version_num(), 5);
    }
}
