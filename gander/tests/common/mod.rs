//! Shared handler definitions for the integration tests.

#![allow(dead_code)]

use gander::{Effect, EventRecord, HandlerDef};
use serde_json::json;

/// A handler whose routine yields the given record fields in order, then a
/// fixed tail of literals.
pub fn yielding(
    source: &'static str,
    fields: &'static [&'static str],
    tail: &'static [&'static str],
) -> HandlerDef {
    HandlerDef::new(source, move |event: EventRecord| {
        let mut effects: Vec<Effect> = fields
            .iter()
            .filter_map(|field| event.get(field).cloned())
            .collect();
        effects.extend(tail.iter().map(|literal| json!(literal)));
        effects
    })
}

/// Destructures `target` and yields it.
pub fn ping() -> HandlerDef {
    yielding(
        "fn (_ref) { let target = _ref.target; emit(target); }",
        &["target"],
        &[],
    )
}

/// Takes no arguments, yields two literals.
pub fn chime_twice() -> HandlerDef {
    yielding(
        r#"fn () { emit("first chime"); emit("second chime"); }"#,
        &[],
        &["first chime", "second chime"],
    )
}

/// Destructures three fields, referencing them as `two`, `three`, `one` in
/// that body order, and yields them the same way.
pub fn two_three_one() -> HandlerDef {
    yielding(
        r#"fn (_ref) { emit(_ref.two); emit(_ref.three); emit(_ref.one); emit("done"); }"#,
        &["two", "three", "one"],
        &["done"],
    )
}

/// Destructures `stuffed` and yields it.
pub fn stuff() -> HandlerDef {
    yielding(
        "fn (_ref) { emit(_ref.stuffed); }",
        &["stuffed"],
        &[],
    )
}

/// A routine taking nothing, yielding one literal.
pub fn named(source: &'static str, literal: &'static str) -> HandlerDef {
    HandlerDef::new(source, move |_event: EventRecord| vec![json!(literal)])
}
