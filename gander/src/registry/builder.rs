//! Registry construction.

use crate::gate::{IdLedger, check};
use crate::introspect::{REF_MARKER, arg_names, ref_fields};
use crate::registry::table::HandlerTable;
use gander_core::{
    ConfigError, Effect, EventId, EventRecord, Every, HandlerDef, ListenStrategy, Routine,
};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// First-parameter name meaning "the routine takes the whole event record".
const RECORD_PARAM: &str = "action";

/// Creates event records for one registration.
///
/// A creator knows its identifier and its ordered field list; calling
/// [`create`](EventCreator::create) maps positional arguments onto the
/// fields. Every call allocates a fresh record.
#[derive(Clone, Debug)]
pub struct EventCreator {
    id: EventId,
    fields: Vec<String>,
}

impl EventCreator {
    /// The identifier stamped into every record this creator makes.
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// The ordered field list, as recovered from the routine's source.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Build a record, assigning arguments to fields positionally.
    ///
    /// Arguments beyond the field list are silently ignored; fields beyond
    /// the argument list are left absent from the record.
    pub fn create<I>(&self, args: I) -> EventRecord
    where
        I: IntoIterator,
        I::Item: Into<Effect>,
    {
        let mut record = EventRecord::new(self.id.clone());
        for (field, value) in self.fields.iter().zip(args) {
            record.insert(field.clone(), value.into());
        }
        record
    }
}

/// The built output: four insertion-ordered mappings over one table's
/// registrations.
///
/// Creators and identifiers are keyed by entry name; routines and strategies
/// by identifier. The key sets correspond 1:1 through the name ↔ identifier
/// indirection. A registry is immutable once built.
#[derive(Default)]
pub struct Registry {
    creators: IndexMap<String, EventCreator>,
    routines: IndexMap<EventId, Option<Arc<dyn Routine>>>,
    types: IndexMap<String, EventId>,
    strategies: IndexMap<EventId, Arc<dyn ListenStrategy>>,
}

impl Registry {
    /// Creator for one entry name.
    pub fn creator(&self, name: &str) -> Option<&EventCreator> {
        self.creators.get(name)
    }

    /// Routine registered under one identifier, if the entry carried one.
    pub fn routine(&self, id: &EventId) -> Option<&Arc<dyn Routine>> {
        self.routines.get(id).and_then(|routine| routine.as_ref())
    }

    /// Identifier produced for one entry name.
    pub fn event_type(&self, name: &str) -> Option<&EventId> {
        self.types.get(name)
    }

    /// Strategy bound to one identifier.
    pub fn strategy(&self, id: &EventId) -> Option<&Arc<dyn ListenStrategy>> {
        self.strategies.get(id)
    }

    /// All creators, in registration order.
    pub fn creators(&self) -> &IndexMap<String, EventCreator> {
        &self.creators
    }

    /// All routines, in registration order. `None` marks an entry registered
    /// without a routine.
    pub fn routines(&self) -> &IndexMap<EventId, Option<Arc<dyn Routine>>> {
        &self.routines
    }

    /// Name → identifier mapping, in registration order.
    pub fn types(&self) -> &IndexMap<String, EventId> {
        &self.types
    }

    /// All strategies, in registration order.
    pub fn strategies(&self) -> &IndexMap<EventId, Arc<dyn ListenStrategy>> {
        &self.strategies
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether anything registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `dyn Routine` is opaque (no `Debug` supertrait), so summarize the
        // routines map by key and presence, mirroring `HandlerDef`'s manual
        // impl. The other maps debug-print directly.
        let routines: Vec<(&EventId, bool)> = self
            .routines
            .iter()
            .map(|(id, routine)| (id, routine.is_some()))
            .collect();
        f.debug_struct("Registry")
            .field("creators", &self.creators)
            .field("routines", &routines)
            .field("types", &self.types)
            .field("strategies", &self.strategies)
            .finish()
    }
}

/// Builds a [`Registry`] from one or more handler tables.
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .prefix("ns")
///     .default_strategy(Latest)
///     .build(table)?;
/// ```
pub struct RegistryBuilder {
    prefix: String,
    default_strategy: Arc<dyn ListenStrategy>,
    validate: bool,
    ledger: Arc<IdLedger>,
    auto_id: u64,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        RegistryBuilder::new()
    }
}

impl RegistryBuilder {
    /// A builder with no prefix, the [`Every`] default strategy, validation
    /// on, and the process-wide ledger.
    pub fn new() -> Self {
        RegistryBuilder {
            prefix: String::new(),
            default_strategy: Arc::new(Every),
            validate: true,
            ledger: IdLedger::global(),
            auto_id: 0,
        }
    }

    /// Identifier prefix for every registration of this build.
    ///
    /// `""` and `"/"` mean no prefix; anything else gets a `/` appended
    /// unless it already ends in one, so `"a"` and `"a/"` produce the same
    /// identifiers.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Strategy for entries that don't name their own. Defaults to
    /// [`Every`].
    pub fn default_strategy(mut self, strategy: impl ListenStrategy + 'static) -> Self {
        self.default_strategy = Arc::new(strategy);
        self
    }

    /// Turn the validation gate on or off. On by default; turning it off
    /// also skips identifier claiming, so uniqueness is no longer enforced.
    pub fn validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Use an explicit taken-identifier ledger instead of the process-wide
    /// one. Tests inject a fresh ledger per test to stay isolated.
    pub fn ledger(mut self, ledger: Arc<IdLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    /// Build a registry from one table.
    ///
    /// A fatal validation failure aborts the whole build; no partial
    /// registry is observable. Identifiers claimed before the failure stay
    /// claimed.
    pub fn build(self, table: HandlerTable) -> Result<Registry, ConfigError> {
        self.build_all([table])
    }

    /// Build one registry from several tables in a single pass.
    ///
    /// Tables share the prefix, the ledger, and one auto-counter; entries
    /// register in table order, then each table's own order.
    pub fn build_all(
        mut self,
        tables: impl IntoIterator<Item = HandlerTable>,
    ) -> Result<Registry, ConfigError> {
        let prefix = normalize_prefix(&self.prefix);
        let mut registry = Registry::default();

        for table in tables {
            for (name, spec) in table.into_entries() {
                let Some(spec) = spec else {
                    continue;
                };
                let (strategy, handler) = spec.resolve();
                let strategy = strategy.unwrap_or_else(|| self.default_strategy.clone());

                let id = EventId::Text(if name.is_empty() {
                    let counter = self.auto_id;
                    self.auto_id += 1;
                    format!("{prefix}{counter}")
                } else {
                    format!("{prefix}{name}")
                });

                let fields = infer_fields(handler.as_ref(), &id);

                if self.validate {
                    // A fatal result propagates; an unhealthy one already
                    // warned inside the gate.
                    check(&self.ledger, &id, &fields, handler.as_ref())?;
                }

                let creator = EventCreator {
                    id: id.clone(),
                    fields,
                };
                debug!(
                    name = %name,
                    id = %id,
                    fields = ?creator.fields(),
                    strategy = strategy.label(),
                    "registered event"
                );

                registry
                    .routines
                    .insert(id.clone(), handler.map(|handler| handler.routine().clone()));
                registry.creators.insert(name.clone(), creator);
                registry.types.insert(name, id.clone());
                registry.strategies.insert(id, strategy);
            }
        }

        Ok(registry)
    }
}

/// Field inference for one entry, per the first-parameter convention.
///
/// A `_ref`-marked first parameter means "destructured reference": recover
/// the fields its body reads. A first parameter named `action` takes the
/// whole record and declares no fields. Anything else earns an advisory
/// warning and declares no fields.
fn infer_fields(handler: Option<&HandlerDef>, id: &EventId) -> Vec<String> {
    let Some(handler) = handler else {
        return Vec::new();
    };
    let args = arg_names(handler.source());
    let Some(first) = args.first() else {
        return Vec::new();
    };
    if first.starts_with(REF_MARKER) {
        ref_fields(handler.source(), first).unwrap_or_default()
    } else {
        if first != RECORD_PARAM {
            warn!(
                %id,
                param = %first,
                "possibly flawed registration: expected `action` or a destructured \
                 reference as the routine's first parameter"
            );
        }
        Vec::new()
    }
}

/// Prefix normalization: `""` and `"/"` vanish; anything else ends in
/// exactly one `/`.
fn normalize_prefix(prefix: &str) -> String {
    match prefix {
        "" | "/" => String::new(),
        p if p.ends_with('/') => p.to_string(),
        p => format!("{p}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_normalization_cases() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix("a"), "a/");
        assert_eq!(normalize_prefix("a/"), "a/");
        assert_eq!(normalize_prefix("ns/deep/"), "ns/deep/");
    }

    #[test]
    fn field_inference_follows_the_first_parameter() {
        let id = EventId::from("t/x");

        let destructured = HandlerDef::new("fn (_ref) { emit(_ref.target); }", noop);
        assert_eq!(infer_fields(Some(&destructured), &id), vec!["target"]);

        let whole_record = HandlerDef::new("fn (action) { emit(action); }", noop);
        assert!(infer_fields(Some(&whole_record), &id).is_empty());

        let misnamed = HandlerDef::new("fn (event) { emit(event); }", noop);
        assert!(infer_fields(Some(&misnamed), &id).is_empty());

        let no_params = HandlerDef::new("fn () { emit(1); }", noop);
        assert!(infer_fields(Some(&no_params), &id).is_empty());

        assert!(infer_fields(None, &id).is_empty());
    }

    fn noop(_event: EventRecord) -> Vec<Effect> {
        Vec::new()
    }
}
