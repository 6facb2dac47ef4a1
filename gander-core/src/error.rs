//! Fatal registration errors.

use crate::record::EventId;
use thiserror::Error;

/// A fatal, synchronous configuration failure.
///
/// Any of these aborts the whole `build` call that raised it; no partial
/// registry is observable. Identifiers claimed before the failure stay
/// claimed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The identifier was already registered, in this registry or any other
    /// built during the life of the process.
    #[error(
        "event id {id} is already taken; ids (prefix + entry name) must be unique across the process. Taken ids: {taken:?}"
    )]
    DuplicateId {
        /// The identifier that collided.
        id: EventId,
        /// Every identifier claimed so far, for the error report.
        taken: Vec<EventId>,
    },

    /// A creator field tried to use the reserved record key.
    #[error(
        "illegal field name for event {id}: a field can't be called `{field}`, since that's internally reserved"
    )]
    ReservedField {
        /// The registration that declared the field.
        id: EventId,
        /// The offending field name.
        field: String,
    },
}
