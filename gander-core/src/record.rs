//! Event identifiers and the records that carry them.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Reserved record key carrying the event's identifier.
///
/// No creator field may use this name; the validation gate rejects tables
/// that try.
pub const TYPE_KEY: &str = "type";

/// The unique tag distinguishing one kind of event from another.
///
/// Identifiers produced during registration are always [`EventId::Text`],
/// formed as `normalized_prefix + name` (or an auto-incremented counter when
/// the entry has no name). [`EventId::Num`] exists for identifiers supplied
/// by an external authoring layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum EventId {
    /// Path-like textual identifier, e.g. `"ns/stuff"`.
    Text(String),
    /// Numeric identifier.
    Num(u64),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Text(text) => f.write_str(text),
            EventId::Num(num) => write!(f, "{num}"),
        }
    }
}

impl From<&str> for EventId {
    fn from(text: &str) -> Self {
        EventId::Text(text.to_string())
    }
}

impl From<String> for EventId {
    fn from(text: String) -> Self {
        EventId::Text(text)
    }
}

impl From<u64> for EventId {
    fn from(num: u64) -> Self {
        EventId::Num(num)
    }
}

impl From<&EventId> for Value {
    fn from(id: &EventId) -> Self {
        match id {
            EventId::Text(text) => Value::String(text.clone()),
            EventId::Num(num) => Value::from(*num),
        }
    }
}

/// One emitted event: an insertion-ordered field mapping whose first entry
/// is the identifier under [`TYPE_KEY`].
///
/// Records are freshly allocated per creator call and never recycled. A
/// field declared by the creator but not supplied an argument is absent from
/// the record; reading it yields `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventRecord {
    entries: IndexMap<String, Value>,
}

impl EventRecord {
    /// Start a record for the given identifier. The identifier entry is
    /// always first.
    pub fn new(id: EventId) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(TYPE_KEY.to_string(), Value::from(&id));
        EventRecord { entries }
    }

    /// Set a field. Insertion order is preserved for serialization and
    /// iteration.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.entries.insert(field.into(), value);
    }

    /// The identifier stored under [`TYPE_KEY`].
    pub fn event_type(&self) -> Option<&Value> {
        self.entries.get(TYPE_KEY)
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    /// Number of entries, the identifier included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a record that has lost even its identifier entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifier_entry_comes_first() {
        let mut record = EventRecord::new(EventId::from("ns/stuff"));
        record.insert("stuffed", json!("X"));
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![TYPE_KEY, "stuffed"]);
        assert_eq!(record.event_type(), Some(&json!("ns/stuff")));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut record = EventRecord::new(EventId::from("a/b"));
        record.insert("two", json!(2));
        record.insert("one", json!(1));
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"type":"a/b","two":2,"one":1}"#);
    }

    #[test]
    fn numeric_identifiers_stay_numeric() {
        let record = EventRecord::new(EventId::from(7));
        assert_eq!(record.event_type(), Some(&json!(7)));
        assert_eq!(EventId::from(7).to_string(), "7");
    }
}
