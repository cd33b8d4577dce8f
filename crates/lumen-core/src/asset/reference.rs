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

use super::AssetUUID;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An addressable reference to a panel asset.
///
/// Serializes as its bare address string, so catalogs read naturally:
/// `asset: "ui/loading.prefab"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AssetRef {
    address: String,
    uuid: AssetUUID,
}

impl AssetRef {
    /// Creates a reference from an address, deriving its UUID.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let uuid = AssetUUID::new_v5(&address);
        Self { address, uuid }
    }

    /// The address the asset was authored under.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The stable id derived from the address.
    pub fn uuid(&self) -> AssetUUID {
        self.uuid
    }
}

impl From<String> for AssetRef {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

impl From<&str> for AssetRef {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<AssetRef> for String {
    fn from(asset: AssetRef) -> Self {
        asset.address
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_follows_address() {
        let a = AssetRef::new("ui/title.prefab");
        assert_eq!(a.uuid(), AssetUUID::new_v5("ui/title.prefab"));
        assert_eq!(a, AssetRef::from("ui/title.prefab"));
    }

    #[test]
    fn serializes_as_plain_address() {
        let a = AssetRef::new("ui/title.prefab");
        let text = ron::to_string(&a).unwrap();
        assert_eq!(text, "\"ui/title.prefab\"");
        let back: AssetRef = ron::from_str(&text).unwrap();
        assert_eq!(back, a);
    }
}
