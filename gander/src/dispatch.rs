//! The composite dispatch plan handed to the consuming runtime.

use crate::registry::Registry;
use gander_core::{EventId, ListenStrategy, Routine};
use std::fmt;
use std::sync::Arc;

/// One dispatch registration, ready for the external scheduler: which
/// strategy should listen for which identifier with which routine.
#[derive(Clone)]
pub struct DispatchDescriptor {
    /// The listen strategy, forwarded verbatim from the registry.
    pub strategy: Arc<dyn ListenStrategy>,
    /// The event identifier the runtime should match on.
    pub id: EventId,
    /// The routine to run, if the registration carried one.
    pub routine: Option<Arc<dyn Routine>>,
}

impl fmt::Debug for DispatchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchDescriptor")
            .field("strategy", &self.strategy.label())
            .field("id", &self.id)
            .field("routine", &self.routine.as_ref().map(|_| "<routine>"))
            .finish()
    }
}

/// Merge several registries into one descriptor sequence.
///
/// The plan is lazy and single-pass: descriptors are produced on demand, in
/// registry order and then each registry's own insertion order, and the
/// sequence is exhausted after one traversal — the runtime consumes it once
/// at startup. The order is deterministic for fixed inputs.
pub fn dispatch_plan(registries: &[Registry]) -> DispatchPlan<'_> {
    DispatchPlan {
        outer: registries.iter(),
        inner: None,
    }
}

/// Lazy iterator over the merged dispatch descriptors. See
/// [`dispatch_plan`].
pub struct DispatchPlan<'a> {
    outer: std::slice::Iter<'a, Registry>,
    inner: Option<(
        &'a Registry,
        indexmap::map::Iter<'a, EventId, Arc<dyn ListenStrategy>>,
    )>,
}

impl Iterator for DispatchPlan<'_> {
    type Item = DispatchDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((registry, strategies)) = &mut self.inner
                && let Some((id, strategy)) = strategies.next()
            {
                return Some(DispatchDescriptor {
                    strategy: strategy.clone(),
                    id: id.clone(),
                    routine: registry.routine(id).cloned(),
                });
            }
            let registry = self.outer.next()?;
            self.inner = Some((registry, registry.strategies().iter()));
        }
    }
}
