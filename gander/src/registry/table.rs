//! Handler tables and the three accepted entry shapes.

use gander_core::{HandlerDef, ListenStrategy};
use indexmap::IndexMap;
use std::sync::Arc;

/// One table entry, in any of the three declared shapes.
///
/// Every shape resolves to the same canonical `(strategy, handler)` pair at
/// ingestion. The precedence rule is fixed: an entry-level strategy always
/// wins; an entry that doesn't name one falls back to the registry's
/// default.
#[derive(Clone, Debug)]
pub enum EntrySpec {
    /// A bare routine, listening with the registry's default strategy.
    Handler(HandlerDef),
    /// An ordered `(strategy, handler)` pair.
    WithStrategy(Arc<dyn ListenStrategy>, HandlerDef),
    /// A record with named fields, either of which may be left out.
    Full {
        /// Entry-level strategy override.
        strategy: Option<Arc<dyn ListenStrategy>>,
        /// The routine, if any. A strategy-only entry still registers.
        handler: Option<HandlerDef>,
    },
}

impl EntrySpec {
    /// Canonical `(strategy, handler)` pair.
    pub(crate) fn resolve(self) -> (Option<Arc<dyn ListenStrategy>>, Option<HandlerDef>) {
        match self {
            EntrySpec::Handler(handler) => (None, Some(handler)),
            EntrySpec::WithStrategy(strategy, handler) => (Some(strategy), Some(handler)),
            EntrySpec::Full { strategy, handler } => (strategy, handler),
        }
    }
}

impl From<HandlerDef> for EntrySpec {
    fn from(handler: HandlerDef) -> Self {
        EntrySpec::Handler(handler)
    }
}

/// An ordered mapping from entry name to entry, the input to a registry
/// build.
///
/// Iteration order is the table's own insertion order and is preserved all
/// the way into the dispatch plan. A `None` entry is kept in the table but
/// silently skipped at build time.
#[derive(Clone, Debug, Default)]
pub struct HandlerTable {
    entries: IndexMap<String, Option<EntrySpec>>,
}

impl HandlerTable {
    /// An empty table.
    pub fn new() -> Self {
        HandlerTable::default()
    }

    /// Add one entry. Later inserts under the same name replace the earlier
    /// entry without disturbing its position.
    pub fn entry(mut self, name: impl Into<String>, spec: impl Into<Option<EntrySpec>>) -> Self {
        self.entries.insert(name.into(), spec.into());
        self
    }

    /// Number of entries, skipped ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, Option<EntrySpec>)> {
        self.entries.into_iter()
    }
}
