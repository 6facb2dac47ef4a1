//! # gander-core
//!
//! Core data model and seams for the Gander event-registry engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! consuming runtimes and authoring layers that don't need the full `gander`
//! construction engine.
//!
//! # The Shape of the System
//!
//! Gander turns a table of handler definitions into a dispatch registry that
//! an external reactive runtime consumes at startup. The pieces defined here
//! are the vocabulary both sides share:
//!
//! ## Records ([`EventRecord`], [`EventId`])
//!
//! An event record is an insertion-ordered field mapping whose first entry,
//! under the reserved key [`TYPE_KEY`], carries the event's identifier.
//! Identifiers are globally unique for the life of the process.
//!
//! ## Routines ([`Routine`], [`HandlerDef`])
//!
//! A routine is a cooperative handler: invoked with one event record, it
//! yields a sequence of opaque [`Effect`]s for the runtime to interpret.
//! Gander never runs routines; it stores and indexes them. A [`HandlerDef`]
//! pairs a routine with the serialized source text the introspection engine
//! reads to recover the routine's field usage.
//!
//! ## Strategies ([`ListenStrategy`])
//!
//! A listen strategy is the policy controlling when and how often a routine
//! runs in response to matching events. Strategies are opaque capabilities:
//! Gander forwards them verbatim into dispatch descriptors and never invokes
//! them.
//!
//! # Error Types
//!
//! - [`ConfigError`] - fatal registration failures (duplicate identifier,
//!   reserved field name)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod record;
mod routine;
mod strategy;

pub use error::ConfigError;
pub use record::{EventId, EventRecord, TYPE_KEY};
pub use routine::{Effect, EffectSeq, HandlerDef, Routine};
pub use strategy::{Every, Latest, ListenStrategy};
