//! Listen strategies: when and how often a routine runs.

use std::fmt;

/// The policy controlling how a routine is invoked in response to matching
/// events.
///
/// Strategies are opaque capabilities. Gander stores them in the registry
/// and re-emits them verbatim inside dispatch descriptors; it never calls
/// them. The consuming runtime interprets the strategy when it registers the
/// descriptor, using [`label`](ListenStrategy::label) only for its
/// registration log.
pub trait ListenStrategy: Send + Sync + fmt::Debug {
    /// Short tag naming the policy, e.g. `"every"`.
    fn label(&self) -> &'static str;
}

/// Run the routine for every matching event. The default strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Every;

impl ListenStrategy for Every {
    fn label(&self) -> &'static str {
        "every"
    }
}

/// Run the routine only for the newest matching event, cancelling a run
/// still in flight when a newer event arrives.
#[derive(Clone, Copy, Debug, Default)]
pub struct Latest;

impl ListenStrategy for Latest {
    fn label(&self) -> &'static str {
        "latest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Every.label(), "every");
        assert_eq!(Latest.label(), "latest");
    }
}
