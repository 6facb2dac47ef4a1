//! Global uniqueness and shape validation for registrations.

use crate::introspect::{REF_MARKER, arg_names, ref_fields};
use gander_core::{ConfigError, EventId, HandlerDef, TYPE_KEY};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::warn;

/// The taken-identifier set: every event identifier successfully registered
/// so far.
///
/// Uniqueness is enforced across every registry that shares a ledger. The
/// process-wide default ([`IdLedger::global`]) lives for the life of the
/// process and is never torn down; tests that build registries should inject
/// a fresh ledger per test instead. Claims are never rolled back, including
/// when a build aborts partway through a table.
#[derive(Debug, Default)]
pub struct IdLedger {
    taken: Mutex<HashSet<EventId>>,
}

impl IdLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        IdLedger::default()
    }

    /// The process-wide ledger, shared by every builder that doesn't inject
    /// its own.
    pub fn global() -> Arc<IdLedger> {
        static GLOBAL: OnceLock<Arc<IdLedger>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(IdLedger::new())).clone()
    }

    /// Atomically check-and-insert one identifier.
    ///
    /// The check and the insert happen under one lock, so no identifier can
    /// pass twice even under reentrant construction.
    pub fn claim(&self, id: &EventId) -> Result<(), ConfigError> {
        let mut taken = self.taken.lock().unwrap();
        if !taken.insert(id.clone()) {
            let mut all: Vec<EventId> = taken.iter().cloned().collect();
            all.sort();
            return Err(ConfigError::DuplicateId {
                id: id.clone(),
                taken: all,
            });
        }
        Ok(())
    }

    /// Whether the identifier has been claimed.
    pub fn contains(&self, id: &EventId) -> bool {
        self.taken.lock().unwrap().contains(id)
    }
}

/// Validate one registration. Returns whether it looks healthy.
///
/// Fatal (aborts the whole build): the identifier is already taken, or a
/// creator field uses the reserved record key. On success the identifier is
/// claimed immediately.
///
/// Advisory (`Ok(false)` plus a warning): the handler's first parameter
/// carries the destructured-reference marker but no fields could be
/// recovered from the body — a "possibly misauthored" heuristic, not a
/// correctness violation.
pub fn check(
    ledger: &IdLedger,
    id: &EventId,
    fields: &[String],
    handler: Option<&HandlerDef>,
) -> Result<bool, ConfigError> {
    ledger.claim(id)?;

    if let Some(field) = fields.iter().find(|field| *field == TYPE_KEY) {
        return Err(ConfigError::ReservedField {
            id: id.clone(),
            field: field.clone(),
        });
    }

    let mut healthy = true;
    if let Some(handler) = handler {
        let args = arg_names(handler.source());
        if let Some(first) = args.first()
            && first.starts_with(REF_MARKER)
            && ref_fields(handler.source(), first).is_none()
        {
            warn!(
                %id,
                "possibly flawed registration: the routine expects a destructured \
                 reference as its first parameter, but no fields were recovered from its body"
            );
            healthy = false;
        }
    }

    Ok(healthy)
}
