/*!
 * Passport metadata trees.
 *
 * A passport is the hierarchical key-value metadata record the backend
 * attaches to every dictionary object. Nodes either hold a terminal string
 * value ("leaf") or a map from property keys to lists of child nodes.
 * Nodes are addressed with dotted locator paths such as
 * `bibliography.bibliographical_text_field`; a locator can match more than
 * one node when repeated keys fan out into several branches.
 */

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::errors::PassportError;

static LOCATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").expect("locator regex must compile")
});

/// Dotted path addressing nodes within a passport tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    segments: Vec<String>,
}

impl Locator {
    /// Parse a dotted locator string, validating its syntax.
    pub fn parse(raw: &str) -> Result<Self, PassportError> {
        if !LOCATOR_REGEX.is_match(raw) {
            return Err(PassportError::InvalidLocator(raw.to_string()));
        }
        Ok(Locator {
            segments: raw.split('.').map(str::to_string).collect(),
        })
    }

    /// The individual path segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for Locator {
    type Err = PassportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// A node in a passport tree.
///
/// Loaded once from the backend when the owning object is deserialized and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passport {
    /// Child nodes keyed by property name; repeated keys arrive as lists
    properties: BTreeMap<String, Vec<Passport>>,
    /// Terminal value, present on leaf nodes only
    leaf: Option<String>,
}

impl Passport {
    /// Create an empty inner node.
    pub fn new() -> Self {
        Passport::default()
    }

    /// Create a leaf node holding a terminal string value.
    pub fn leaf(value: impl Into<String>) -> Self {
        Passport {
            properties: BTreeMap::new(),
            leaf: Some(value.into()),
        }
    }

    /// Append a child node under the given property key.
    pub fn add_property(&mut self, key: impl Into<String>, node: Passport) {
        self.properties.entry(key.into()).or_default().push(node);
    }

    /// Whether this node holds a terminal value.
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// The node's terminal string value.
    pub fn leaf_value(&self) -> Result<&str, PassportError> {
        self.leaf.as_deref().ok_or(PassportError::MissingLeafValue)
    }

    /// Child nodes stored under a property key on this node.
    pub fn property(&self, key: &str) -> Option<&[Passport]> {
        self.properties.get(key).map(Vec::as_slice)
    }

    /// Collect all nodes reachable at the given dotted locator.
    ///
    /// Traversal fans out over every child list on the way down, so a locator
    /// can yield several nodes; results keep the order in which branches are
    /// stored. Signals [`PassportError::NotFound`] when no node matches and
    /// [`PassportError::InvalidLocator`] for syntactically broken locators.
    pub fn extract_property(&self, locator: &str) -> Result<Vec<&Passport>, PassportError> {
        let locator = Locator::parse(locator)?;
        let mut matches = vec![self];
        for segment in locator.segments() {
            let mut next = Vec::new();
            for node in matches {
                if let Some(children) = node.properties.get(segment) {
                    next.extend(children.iter());
                }
            }
            if next.is_empty() {
                return Err(PassportError::NotFound(locator.to_string()));
            }
            matches = next;
        }
        Ok(matches)
    }
}

/// One property value on the wire: a single node or a list of nodes.
#[derive(Deserialize)]
#[serde(untagged)]
enum NodeList {
    One(Passport),
    Many(Vec<Passport>),
}

impl<'de> Deserialize<'de> for Passport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PassportVisitor)
    }
}

struct PassportVisitor;

impl<'de> Visitor<'de> for PassportVisitor {
    type Value = Passport;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a passport leaf value or a map of properties")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Passport::leaf(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Passport::leaf(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Passport::leaf(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Passport::leaf(value.to_string()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Passport::leaf(value.to_string()))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut passport = Passport::new();
        while let Some((key, value)) = map.next_entry::<String, NodeList>()? {
            match value {
                NodeList::One(node) => passport.add_property(key.as_str(), node),
                NodeList::Many(nodes) => {
                    for node in nodes {
                        passport.add_property(key.as_str(), node);
                    }
                }
            }
        }
        Ok(passport)
    }
}
