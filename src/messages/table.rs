//! Flat translation listing as delivered by the CMS.

use std::collections::HashMap;
use std::fmt;

use serde::de::{
    MapAccess,
    Visitor,
};
use serde::ser::SerializeMap;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use serde_json::Value;

use super::tree::leaf_text;

/// One CMS translation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Grouping label, possibly dotted (`"auth.login"`).
    pub namespace: String,
    /// Possibly dotted (`"tabs.giftCards"`).
    pub key: String,
    /// Non-string values are kept as their JSON text (`3`, `null`); a missing value is empty.
    #[serde(default, deserialize_with = "any_value_as_text")]
    pub value: String,
}

impl TranslationRecord {
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { namespace: namespace.into(), key: key.into(), value: value.into() }
    }
}

fn any_value_as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| leaf_text(&value))
}

/// Entries of a single namespace, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceEntries {
    namespace: String,
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl NamespaceEntries {
    fn new(namespace: String) -> Self {
        Self { namespace, ..Self::default() }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `(key, value)` pairs in first-insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let &position = self.positions.get(key)?;
        self.entries.get(position).map(|(_, value)| value.as_str())
    }

    fn set(&mut self, key: String, value: String) {
        match self.positions.get(&key).and_then(|&position| self.entries.get_mut(position)) {
            Some((_, slot)) => *slot = value,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }
}

/// Translations grouped by namespace, then key.
///
/// Iteration follows the order in which namespaces and keys were first seen, since the
/// merge result can depend on it. A repeated (namespace, key) keeps its first position
/// and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    namespaces: Vec<NamespaceEntries>,
    positions: HashMap<String, usize>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let namespace = namespace.into();
        let position = match self.positions.get(&namespace) {
            Some(&position) => position,
            None => {
                let position = self.namespaces.len();
                self.positions.insert(namespace.clone(), position);
                self.namespaces.push(NamespaceEntries::new(namespace));
                position
            }
        };
        if let Some(entries) = self.namespaces.get_mut(position) {
            entries.set(key.into(), value.into());
        }
    }

    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = TranslationRecord>) -> Self {
        records.into_iter().collect()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceEntries> {
        self.namespaces.iter()
    }

    /// Value of (namespace, key), exactly as listed.
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        let &position = self.positions.get(namespace)?;
        self.namespaces.get(position)?.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.iter().all(|ns| ns.entries.is_empty())
    }

    /// Number of (namespace, key) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.entries.len()).sum()
    }
}

impl FromIterator<TranslationRecord> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = TranslationRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record.namespace, record.key, record.value);
        }
        table
    }
}

/// `{ "namespace": { "key": "value" } }`, in table order.
impl Serialize for TranslationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.namespaces.len()))?;
        for ns in &self.namespaces {
            map.serialize_entry(&ns.namespace, &EntriesRef(&ns.entries))?;
        }
        map.end()
    }
}

struct EntriesRef<'a>(&'a [(String, String)]);

impl Serialize for EntriesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Reads the grouped object form, keeping document order.
impl<'de> Deserialize<'de> for TranslationTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = TranslationTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of namespaces mapping keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = TranslationTable::new();
        while let Some((namespace, OrderedEntries(entries))) =
            access.next_entry::<String, OrderedEntries>()?
        {
            for (key, value) in entries {
                table.insert(namespace.clone(), key, value);
            }
        }
        Ok(table)
    }
}

struct OrderedEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = OrderedEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            entries.push((key, leaf_text(&value)));
        }
        Ok(OrderedEntries(entries))
    }
}
