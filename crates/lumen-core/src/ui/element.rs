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

use std::collections::HashMap;

/// What a named prefab element is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A text label and its current content.
    Text(String),
    /// An image, by sprite name.
    Image(String),
    /// A nested canvas.
    Canvas,
}

/// A named element inside a panel prefab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The key the element is looked up by (its object name).
    pub name: String,
    /// Where the element sits in the prefab hierarchy.
    pub path: String,
    /// The element payload.
    pub kind: ElementKind,
}

/// The named elements of a panel prefab.
///
/// Panel behaviours reach into their prefab through this table rather than
/// walking the hierarchy. A lookup that misses is logged at `error`, since it
/// always means the prefab and the behaviour disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementTable {
    elements: HashMap<String, Element>,
}

impl ElementTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an element under its name.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.name.clone(), element);
    }

    /// Builder form of [`insert`](Self::insert) for a text element.
    pub fn with_text(mut self, name: &str, path: &str, content: &str) -> Self {
        self.insert(Element {
            name: name.to_string(),
            path: path.to_string(),
            kind: ElementKind::Text(content.to_string()),
        });
        self
    }

    /// Looks an element up by name.
    pub fn get(&self, name: &str) -> Option<&Element> {
        let found = self.elements.get(name);
        if found.is_none() {
            log::error!("ElementTable: no element named '{name}'");
        }
        found
    }

    /// Returns the content of a text element.
    pub fn text(&self, name: &str) -> Option<&str> {
        match &self.get(name)?.kind {
            ElementKind::Text(content) => Some(content),
            other => {
                log::error!("ElementTable: '{name}' is {other:?}, not a text element");
                None
            }
        }
    }

    /// Overwrites the content of a text element; returns `false` on a miss.
    pub fn set_text(&mut self, name: &str, content: &str) -> bool {
        match self.elements.get_mut(name).map(|e| &mut e.kind) {
            Some(ElementKind::Text(current)) => {
                *current = content.to_string();
                true
            }
            Some(other) => {
                log::error!("ElementTable: '{name}' is {other:?}, not a text element");
                false
            }
            None => {
                log::error!("ElementTable: no element named '{name}'");
                false
            }
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the table has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
