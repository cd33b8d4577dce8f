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

//! The static panel catalog.

use lumen_core::ui::{PanelDescriptor, UiKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// An error raised while building or querying a [`UiCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A kind was requested that has no descriptor.
    #[error("no panel descriptor registered for {0}")]
    UnknownKind(UiKind),
    /// Two descriptors were given for the same kind.
    #[error("panel descriptor for {0} declared twice")]
    DuplicateKind(UiKind),
    /// The catalog source could not be parsed.
    #[error("invalid panel catalog: {0}")]
    InvalidFormat(String),
}

/// The immutable table of panel descriptors, keyed by kind.
///
/// Serialized as a plain list of descriptors; duplicates are rejected when
/// the list is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PanelDescriptor>", into = "Vec<PanelDescriptor>")]
pub struct UiCatalog {
    entries: BTreeMap<UiKind, PanelDescriptor>,
}

impl UiCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from descriptors, rejecting duplicate kinds.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = PanelDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// Parses a RON list of descriptors.
    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        let descriptors: Vec<PanelDescriptor> =
            ron::from_str(text).map_err(|e| CatalogError::InvalidFormat(e.to_string()))?;
        Self::from_descriptors(descriptors)
    }

    /// Adds a descriptor; fails if its kind is already present.
    pub fn insert(&mut self, descriptor: PanelDescriptor) -> Result<(), CatalogError> {
        let kind = descriptor.kind;
        if self.entries.contains_key(&kind) {
            return Err(CatalogError::DuplicateKind(kind));
        }
        self.entries.insert(kind, descriptor);
        Ok(())
    }

    /// Returns the descriptor for `kind`.
    ///
    /// A missing kind is an error, never a silent `None`: navigation to an
    /// undeclared panel is a content bug that must surface.
    pub fn lookup(&self, kind: UiKind) -> Result<&PanelDescriptor, CatalogError> {
        self.entries
            .get(&kind)
            .ok_or(CatalogError::UnknownKind(kind))
    }

    /// Returns `true` if `kind` has a descriptor.
    pub fn contains(&self, kind: UiKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Iterates over the descriptors in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.entries.values()
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<PanelDescriptor>> for UiCatalog {
    type Error = CatalogError;

    fn try_from(descriptors: Vec<PanelDescriptor>) -> Result<Self, Self::Error> {
        Self::from_descriptors(descriptors)
    }
}

impl From<UiCatalog> for Vec<PanelDescriptor> {
    fn from(catalog: UiCatalog) -> Self {
        catalog.entries.into_values().collect()
    }
}
