//! Table ingestion and registry construction.

mod builder;
mod table;

pub use builder::{EventCreator, Registry, RegistryBuilder};
pub use table::{EntrySpec, HandlerTable};
