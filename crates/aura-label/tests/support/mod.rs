//! Proptest strategies and helpers shared by the label test suites

#![allow(dead_code)]

use aura_label::{Clause, Component, DCLabel, Principal};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Principal universe used by the strategies. Kept small so generated
/// clauses overlap often.
pub const UNIVERSE: [&str; 5] = ["alice", "bob", "carol", "dave", "eve"];

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("aura_label=trace")
        .with_test_writer()
        .try_init();
}

/// Generate arbitrary principals from the universe
pub fn arb_principal() -> impl Strategy<Value = Principal> {
    prop::sample::select(UNIVERSE.to_vec()).prop_map(Principal::from)
}

/// Generate arbitrary clauses, occasionally the empty one
pub fn arb_clause() -> impl Strategy<Value = Clause> {
    prop_oneof![
        9 => prop::collection::btree_set(arb_principal(), 1..4).prop_map(Clause::new),
        1 => Just(Clause::empty()),
    ]
}

/// Generate arbitrary components, unreduced
pub fn arb_component() -> impl Strategy<Value = Component> {
    prop_oneof![
        1 => Just(Component::dc_false()),
        1 => Just(Component::dc_true()),
        6 => prop::collection::btree_set(arb_clause(), 1..5).prop_map(Component::Formula),
    ]
}

/// Generate arbitrary (reduced) labels
pub fn arb_label() -> impl Strategy<Value = DCLabel> {
    (arb_component(), arb_component()).prop_map(|(s, i)| DCLabel::new(s, i))
}

/// Evaluate a component under the assignment where exactly `holding`
/// principals are true.
pub fn eval(component: &Component, holding: &BTreeSet<Principal>) -> bool {
    match component {
        Component::False => false,
        Component::Formula(clauses) => clauses
            .iter()
            .all(|clause| clause.principals().any(|p| holding.contains(p))),
    }
}

/// Every assignment over the universe
pub fn assignments() -> Vec<BTreeSet<Principal>> {
    (0u32..1 << UNIVERSE.len())
        .map(|mask| {
            UNIVERSE
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, name)| Principal::from(*name))
                .collect()
        })
        .collect()
}

/// Implication decided by truth table
pub fn semantically_implies(x: &Component, y: &Component) -> bool {
    assignments()
        .iter()
        .all(|holding| !eval(x, holding) || eval(y, holding))
}

/// Mutual implication
pub fn equivalent(x: &Component, y: &Component) -> bool {
    x.implies(y) && y.implies(x)
}
