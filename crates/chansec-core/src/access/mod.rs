//! Access-control attribute primitives.
//!
//! A protected resource carries an ordered set of named policy tokens
//! ([`ConfigAttribute`]) collected into a [`ConfigAttributeDefinition`].
//! Channel processors scan the definition for the keyword they support;
//! the external interceptor relies on insertion order when matching
//! processors against attributes, so order is preserved and significant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque named policy token attached to a protected resource.
///
/// Attributes are immutable value objects compared by keyword. The core
/// never interprets a keyword beyond equality against a processor's
/// configured keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigAttribute {
    keyword: String,
}

impl ConfigAttribute {
    /// Construct an attribute from a keyword.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// The keyword this attribute carries.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.keyword
    }
}

impl fmt::Display for ConfigAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)
    }
}

impl From<&str> for ConfigAttribute {
    fn from(keyword: &str) -> Self {
        Self::new(keyword)
    }
}

/// Ordered collection of [`ConfigAttribute`] for one protected resource.
///
/// Insertion order is preserved. An empty definition is valid and means
/// no channel policy applies to the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigAttributeDefinition {
    attributes: Vec<ConfigAttribute>,
}

impl ConfigAttributeDefinition {
    /// Construct an empty definition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, preserving insertion order.
    pub fn add(&mut self, attribute: ConfigAttribute) {
        self.attributes.push(attribute);
    }

    /// Iterate the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigAttribute> {
        self.attributes.iter()
    }

    /// Number of attributes in the definition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` when no attributes apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns `true` when any attribute carries the given keyword.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.attributes.iter().any(|a| a.attribute() == keyword)
    }
}

impl FromIterator<ConfigAttribute> for ConfigAttributeDefinition {
    fn from_iter<I: IntoIterator<Item = ConfigAttribute>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigAttributeDefinition {
    type Item = &'a ConfigAttribute;
    type IntoIter = std::slice::Iter<'a, ConfigAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_equality_by_keyword() {
        let a = ConfigAttribute::new("REQUIRES_SECURE_CHANNEL");
        let b = ConfigAttribute::new("REQUIRES_SECURE_CHANNEL");
        let c = ConfigAttribute::new("OTHER");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_attribute_display_is_keyword() {
        let a = ConfigAttribute::new("REQUIRES_SECURE_CHANNEL");
        assert_eq!(a.to_string(), "REQUIRES_SECURE_CHANNEL");
        assert_eq!(a.attribute(), "REQUIRES_SECURE_CHANNEL");
    }

    #[test]
    fn test_definition_preserves_insertion_order() {
        let mut def = ConfigAttributeDefinition::new();
        def.add(ConfigAttribute::new("FIRST"));
        def.add(ConfigAttribute::new("SECOND"));
        def.add(ConfigAttribute::new("THIRD"));

        let order: Vec<&str> = def.iter().map(ConfigAttribute::attribute).collect();
        assert_eq!(order, ["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_empty_definition_is_valid() {
        let def = ConfigAttributeDefinition::new();
        assert!(def.is_empty());
        assert_eq!(def.len(), 0);
        assert!(!def.contains("REQUIRES_SECURE_CHANNEL"));
    }

    #[test]
    fn test_contains_matches_any_position() {
        let def: ConfigAttributeDefinition = ["SOME_IGNORED_ATTRIBUTE", "REQUIRES_SECURE_CHANNEL"]
            .into_iter()
            .map(ConfigAttribute::new)
            .collect();
        assert!(def.contains("REQUIRES_SECURE_CHANNEL"));
        assert!(def.contains("SOME_IGNORED_ATTRIBUTE"));
        assert!(!def.contains("REQUIRES_INSECURE_CHANNEL"));
    }

    #[test]
    fn test_serde_transparent_round_trip() {
        let def: ConfigAttributeDefinition =
            [ConfigAttribute::new("A"), ConfigAttribute::new("B")].into_iter().collect();
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
        let back: ConfigAttributeDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
