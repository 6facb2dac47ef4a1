//! # gander - Event-Registry Construction by Source Introspection
//!
//! `gander` turns a table of handler definitions into a dispatch registry:
//! it derives each routine's argument names by inspecting the routine's
//! serialized source text, builds uniquely-identified event creators, and
//! indexes routines and listen strategies for an external reactive runtime
//! to consume at startup. Scheduling and execution stay outside; this crate
//! only produces descriptors.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use gander::{
//!     dispatch_plan, EntrySpec, EventRecord, HandlerDef, HandlerTable, IdLedger,
//!     RegistryBuilder,
//! };
//! use serde_json::json;
//!
//! // A handler definition pairs a routine with its serialized source. The
//! // destructured first parameter is serialized under the `_ref` marker,
//! // so the builder recovers the `target` field from the body.
//! let ping = HandlerDef::new(
//!     "fn (_ref) { let target = _ref.target; emit(target); }",
//!     |event: EventRecord| event.get("target").cloned().into_iter().collect::<Vec<_>>(),
//! );
//!
//! let table = HandlerTable::new().entry("ping", EntrySpec::Handler(ping));
//!
//! let registry = RegistryBuilder::new()
//!     .prefix("demo")
//!     .ledger(Arc::new(IdLedger::new()))
//!     .build(table)
//!     .unwrap();
//!
//! let creator = registry.creator("ping").unwrap();
//! let record = creator.create([json!(7)]);
//! assert_eq!(record.get("target"), Some(&json!(7)));
//! assert_eq!(
//!     registry.event_type("ping").unwrap().to_string(),
//!     "demo/ping",
//! );
//!
//! // The runtime consumes the merged plan once, in registration order.
//! let plan: Vec<_> = dispatch_plan(std::slice::from_ref(&registry)).collect();
//! assert_eq!(plan.len(), 1);
//! ```
//!
//! ## Global Uniqueness
//!
//! Every identifier ever registered is claimed in an [`IdLedger`]; a second
//! registration of the same identifier fails the whole build with
//! [`ConfigError::DuplicateId`], even across registries. Builders share the
//! process-wide ledger unless one is injected — inject a fresh ledger per
//! test to keep tests isolated.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod gate;
pub mod introspect;
mod registry;

pub use dispatch::{DispatchDescriptor, DispatchPlan, dispatch_plan};
pub use gate::{IdLedger, check};
pub use registry::{EntrySpec, EventCreator, HandlerTable, Registry, RegistryBuilder};

pub use gander_core::{
    // Errors
    ConfigError,
    // Effects and routines
    Effect,
    EffectSeq,
    // Records
    EventId,
    EventRecord,
    // Strategies
    Every,
    // Handler definitions
    HandlerDef,
    Latest,
    ListenStrategy,
    Routine,
    TYPE_KEY,
};
