// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property definitions and the registry holding their values.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyType {
    /// A string value.
    #[default]
    String,
}

/// Declaration of a property.
///
/// # Examples
///
/// ```
/// use lift_tile::property::{PropertyDefinition, PropertyType};
///
/// let def = PropertyDefinition::string("MainIcon");
/// assert_eq!(def.key(), "MainIcon");
/// assert_eq!(def.default_value(), "");
/// assert_eq!(def.kind(), PropertyType::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    key: String,
    default: String,
    kind: PropertyType,
}

impl PropertyDefinition {
    /// Declares a string property with an empty default.
    #[must_use]
    pub fn string(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: String::new(),
            kind: PropertyType::String,
        }
    }

    /// Sets the declared default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Returns the property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the declared default value.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Returns the value type.
    #[must_use]
    pub fn kind(&self) -> PropertyType {
        self.kind
    }
}

/// A property value on its way to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    /// Property key.
    pub key: String,
    /// New value.
    pub value: String,
}

#[derive(Debug, Clone)]
struct Property {
    definition: PropertyDefinition,
    value: String,
    pending: bool,
}

/// Ordered set of properties with change tracking.
///
/// Every defined property starts pending with its declared default, so the
/// first commit publishes the whole set.
///
/// # Examples
///
/// ```
/// use lift_tile::property::{PropertyDefinition, PropertyRegistry};
///
/// let mut registry = PropertyRegistry::new();
/// registry.define(PropertyDefinition::string("MainPageTitle").with_default("TV Lift"))?;
///
/// let batch = registry.take_pending();
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch[0].value, "TV Lift");
/// assert!(registry.take_pending().is_empty());
/// # Ok::<(), lift_tile::Error>(())
/// ```
///
/// Values are only written by the tile itself:
///
/// ```compile_fail
/// use lift_tile::property::{PropertyDefinition, PropertyRegistry};
///
/// let mut registry = PropertyRegistry::new();
/// registry.define(PropertyDefinition::string("MainIcon")).unwrap();
/// registry.set("MainIcon", "icOther");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    properties: Vec<Property>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if the key is already defined.
    pub fn define(&mut self, definition: PropertyDefinition) -> Result<()> {
        if self.contains(definition.key()) {
            return Err(Error::DuplicateProperty(definition.key().to_string()));
        }
        self.properties.push(Property {
            value: definition.default.clone(),
            definition,
            pending: true,
        });
        Ok(())
    }

    /// Sets a property value and marks it pending.
    ///
    /// Returns `false` if no property has this key.
    pub(crate) fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.find_mut(key) {
            Some(property) => {
                property.value = value.into();
                property.pending = true;
                true
            }
            None => false,
        }
    }

    /// Returns the current value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key).map(|p| p.value.as_str())
    }

    /// Returns the definition of a property.
    #[must_use]
    pub fn definition(&self, key: &str) -> Option<&PropertyDefinition> {
        self.find(key).map(|p| &p.definition)
    }

    /// Returns `true` if a property has this key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the number of defined properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns `true` if any property has an uncommitted value.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.properties.iter().any(|p| p.pending)
    }

    /// Returns every `(key, value)` pair in definition order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.properties
            .iter()
            .map(|p| (p.definition.key.clone(), p.value.clone()))
            .collect()
    }

    /// Drains the pending values in definition order.
    pub fn take_pending(&mut self) -> Vec<PropertyChange> {
        self.properties
            .iter_mut()
            .filter(|p| p.pending)
            .map(|p| {
                p.pending = false;
                PropertyChange {
                    key: p.definition.key.clone(),
                    value: p.value.clone(),
                }
            })
            .collect()
    }

    fn find(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.definition.key == key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.definition.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_uses_declared_default() {
        let mut registry = PropertyRegistry::new();
        registry
            .define(PropertyDefinition::string("Key").with_default("fallback"))
            .unwrap();

        assert_eq!(registry.get("Key"), Some("fallback"));
        assert_eq!(registry.definition("Key").unwrap().default_value(), "fallback");
    }

    #[test]
    fn define_rejects_duplicates() {
        let mut registry = PropertyRegistry::new();
        registry.define(PropertyDefinition::string("MainIcon")).unwrap();

        let err = registry
            .define(PropertyDefinition::string("MainIcon"))
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateProperty(key) if key == "MainIcon"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_unknown_key() {
        let mut registry = PropertyRegistry::new();
        assert!(!registry.set("Missing", "value"));
        assert!(registry.is_empty());
    }

    #[test]
    fn new_definitions_are_pending() {
        let mut registry = PropertyRegistry::new();
        registry.define(PropertyDefinition::string("A")).unwrap();
        registry.define(PropertyDefinition::string("B")).unwrap();

        assert!(registry.has_pending());
        let batch = registry.take_pending();
        assert_eq!(
            batch,
            vec![
                PropertyChange {
                    key: "A".to_string(),
                    value: String::new(),
                },
                PropertyChange {
                    key: "B".to_string(),
                    value: String::new(),
                },
            ]
        );
        assert!(!registry.has_pending());
    }

    #[test]
    fn take_pending_keeps_definition_order() {
        let mut registry = PropertyRegistry::new();
        for key in ["First", "Second", "Third"] {
            registry.define(PropertyDefinition::string(key)).unwrap();
        }
        registry.take_pending();

        registry.set("Third", "3");
        registry.set("First", "1");

        let keys: Vec<_> = registry.take_pending().into_iter().map(|c| c.key).collect();
        assert_eq!(keys, ["First", "Third"]);
    }

    #[test]
    fn snapshot_reflects_latest_values() {
        let mut registry = PropertyRegistry::new();
        registry.define(PropertyDefinition::string("Title")).unwrap();
        registry.set("Title", "TV Lift");

        assert_eq!(
            registry.snapshot(),
            vec![("Title".to_string(), "TV Lift".to_string())]
        );
    }
}
