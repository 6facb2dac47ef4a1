//! The cooperative-handler seam.

use crate::record::EventRecord;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An opaque effect yielded by a routine.
///
/// Effects are interpreted solely by the consuming runtime; Gander stores
/// and re-emits them without looking inside.
pub type Effect = Value;

/// A routine's lazily produced effect sequence.
pub type EffectSeq = Box<dyn Iterator<Item = Effect> + Send>;

/// A cooperative handler: invoked with one event record, it yields a
/// sequence of effects.
///
/// Gander only describes and indexes routines; executing them (and
/// interpreting the effects they yield) is the consuming runtime's job.
/// Plain closures of shape `Fn(EventRecord) -> impl IntoIterator<Item =
/// Effect>` implement this trait via the blanket impl below.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Routine",
    label = "must produce an effect sequence from an `EventRecord`",
    note = "Implement `Routine` directly, or use a `Fn(EventRecord) -> impl IntoIterator<Item = Effect>` closure."
)]
pub trait Routine: Send + Sync {
    /// Run the routine against one event record.
    fn run(&self, event: EventRecord) -> EffectSeq;
}

impl<F, I> Routine for F
where
    F: Fn(EventRecord) -> I + Send + Sync,
    I: IntoIterator<Item = Effect>,
    I::IntoIter: Send + 'static,
{
    fn run(&self, event: EventRecord) -> EffectSeq {
        Box::new((self)(event).into_iter())
    }
}

/// One handler definition: a routine plus the serialized source text the
/// introspection engine reads.
///
/// The source is the textual serialization produced by the authoring layer,
/// shaped `fn <name>(<params>) { <body> }`. A destructured first parameter
/// is serialized under a mangled name beginning with the `_ref` marker, with
/// each destructured field appearing in the body as `<param>.<field>`. Only
/// the source is inspected; the routine itself stays opaque.
#[derive(Clone)]
pub struct HandlerDef {
    source: Cow<'static, str>,
    routine: Arc<dyn Routine>,
}

impl HandlerDef {
    /// Pair a routine with its serialized source.
    pub fn new(source: impl Into<Cow<'static, str>>, routine: impl Routine + 'static) -> Self {
        HandlerDef {
            source: source.into(),
            routine: Arc::new(routine),
        }
    }

    /// The serialized source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The runnable routine.
    pub fn routine(&self) -> &Arc<dyn Routine> {
        &self.routine
    }
}

impl fmt::Debug for HandlerDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerDef")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventId;
    use serde_json::json;

    #[test]
    fn closures_are_routines() {
        let routine = |event: EventRecord| {
            let target = event.get("target").cloned();
            target.into_iter().collect::<Vec<_>>()
        };

        let mut record = EventRecord::new(EventId::from("t"));
        record.insert("target", json!(42));

        let effects: Vec<Effect> = routine.run(record).collect();
        assert_eq!(effects, vec![json!(42)]);
    }

    #[test]
    fn handler_def_keeps_source_verbatim() {
        let def = HandlerDef::new("fn (_ref) { emit(_ref.target); }", |_: EventRecord| {
            Vec::<Effect>::new()
        });
        assert_eq!(def.source(), "fn (_ref) { emit(_ref.target); }");
    }
}
