//! Nested message tree consumed by key lookup at render time.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// A node of the message tree: translated text or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    Leaf(String),
    Node(Messages),
}

impl MessageTree {
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    #[must_use]
    pub const fn as_node(&self) -> Option<&Messages> {
        match self {
            Self::Node(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    /// Turn this slot into a group, discarding a leaf if one is here.
    fn ensure_node(&mut self) -> &mut Messages {
        match self {
            Self::Node(node) => node,
            Self::Leaf(_) => {
                *self = Self::Node(Messages::default());
                self.ensure_node()
            }
        }
    }
}

/// String-keyed message groups, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages(BTreeMap<String, MessageTree>);

impl Messages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, MessageTree> {
        self.0.iter()
    }

    /// Direct child, without interpreting dots.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&MessageTree> {
        self.0.get(segment)
    }

    pub fn insert(&mut self, segment: impl Into<String>, tree: MessageTree) -> Option<MessageTree> {
        self.0.insert(segment.into(), tree)
    }

    /// Child group `segment`, created when absent and replacing a leaf when present.
    pub fn node_mut(&mut self, segment: &str) -> &mut Self {
        self.0
            .entry(segment.to_string())
            .or_insert_with(|| MessageTree::Node(Self::default()))
            .ensure_node()
    }

    /// Look up a dot-separated key (`"auth.login.title"`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageTree> {
        let mut segments = key.split('.');
        let first = self.0.get(segments.next()?)?;
        segments.try_fold(first, |tree, segment| tree.as_node()?.0.get(segment))
    }

    /// Translated text for `key`, or the key itself when there is no text for it.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key).and_then(MessageTree::as_leaf) {
            Some(text) => Cow::Borrowed(text),
            None => {
                tracing::trace!(key, "Missing translation");
                Cow::Borrowed(key)
            }
        }
    }

    /// Flatten into `separator`-joined key paths, one entry per leaf.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        self.flatten_into(separator, None, &mut result);
        result
    }

    fn flatten_into(
        &self,
        separator: &str,
        prefix: Option<&str>,
        result: &mut BTreeMap<String, String>,
    ) {
        for (key, tree) in &self.0 {
            let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
            match tree {
                MessageTree::Leaf(text) => {
                    result.insert(full_key, text.clone());
                }
                MessageTree::Node(node) => node.flatten_into(separator, Some(&full_key), result),
            }
        }
    }

    /// Layer `overlay` on top of `self`.
    ///
    /// Groups present on both sides merge recursively; anything else in `overlay`
    /// replaces what `self` holds at that key.
    pub fn deep_merge(&mut self, overlay: Self) {
        for (key, tree) in overlay.0 {
            match tree {
                MessageTree::Node(node) => match self.0.get_mut(&key) {
                    Some(MessageTree::Node(base)) => base.deep_merge(node),
                    _ => {
                        self.0.insert(key, MessageTree::Node(node));
                    }
                },
                leaf @ MessageTree::Leaf(_) => {
                    self.0.insert(key, leaf);
                }
            }
        }
    }

    /// Build from arbitrary JSON.
    ///
    /// Objects become groups, arrays become groups keyed by index and non-string
    /// scalars keep their JSON text. A top-level scalar yields an empty tree.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match json_to_tree(value) {
            MessageTree::Node(node) => node,
            MessageTree::Leaf(_) => Self::default(),
        }
    }
}

fn json_to_tree(value: &Value) -> MessageTree {
    match value {
        Value::Object(map) => MessageTree::Node(Messages(
            map.iter().map(|(key, value)| (key.clone(), json_to_tree(value))).collect(),
        )),
        Value::Array(items) => MessageTree::Node(Messages(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), json_to_tree(value)))
                .collect(),
        )),
        scalar => MessageTree::Leaf(leaf_text(scalar)),
    }
}

/// Text stored for a JSON value in leaf position: strings as-is, anything else as its
/// JSON text (`3`, `true`, `null`).
#[must_use]
pub(super) fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = (&'a String, &'a MessageTree);
    type IntoIter = btree_map::Iter<'a, String, MessageTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, MessageTree)> for Messages {
    fn from_iter<I: IntoIterator<Item = (String, MessageTree)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Assign `value` at `segments` below `messages`.
///
/// Every segment but the last names a group; a leaf found there is replaced by an
/// empty group so the walk never goes through text. The last segment is assigned
/// unconditionally. An empty path is a no-op.
pub fn upsert_path(messages: &mut Messages, segments: &[&str], value: String) {
    match segments {
        [] => {}
        [last] => {
            messages.insert(*last, MessageTree::Leaf(value));
        }
        [head, rest @ ..] => upsert_path(messages.node_mut(head), rest, value),
    }
}
