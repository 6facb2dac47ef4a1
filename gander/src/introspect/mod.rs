//! Source-text introspection: parameter names and field usage.
//!
//! These functions operate on the *textual serialization* of a routine, not
//! on live code. They are single-pass regex extractions with narrow,
//! documented limitations, correct only for source produced by the authoring
//! layer's serializer — there is no balanced-paren tracking and no scoping,
//! so adversarial or hand-mangled text is out of scope.

mod fields;
mod signature;

pub use fields::{REF_MARKER, ref_fields};
pub use signature::arg_names;
