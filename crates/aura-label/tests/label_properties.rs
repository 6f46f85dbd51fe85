//! Property tests for DCLabel lattice laws
//!
//! ## Properties Verified
//!
//! - Join/meet are idempotent, commutative and associative
//! - Bottom flows to every label, every label flows to top
//! - can_flow_to is reflexive and transitive
//! - lub is an upper bound, glb a lower bound

mod support;

use aura_label::{
    can_flow_to, glb, lub, Bottom, Component, DCLabel, JoinSemilattice, MeetSemiLattice, Top,
};
use proptest::prelude::*;
use support::{arb_component, arb_label};

proptest! {
    /// Property: lub and glb are idempotent
    #[test]
    fn prop_label_idempotent(l in arb_label()) {
        prop_assert_eq!(lub(&l, &l), l.clone());
        prop_assert_eq!(glb(&l, &l), l);
    }

    /// Property: lub and glb are commutative
    #[test]
    fn prop_label_commutative(a in arb_label(), b in arb_label()) {
        prop_assert_eq!(a.lub(&b), b.lub(&a));
        prop_assert_eq!(a.glb(&b), b.glb(&a));
    }

    /// Property: lub and glb are associative
    #[test]
    fn prop_label_associative(
        a in arb_label(),
        b in arb_label(),
        c in arb_label()
    ) {
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
        prop_assert_eq!(a.meet(&b).meet(&c), a.meet(&b.meet(&c)));
    }

    /// Property: bottom and top are the identities of join and meet
    #[test]
    fn prop_label_identities(l in arb_label()) {
        prop_assert_eq!(l.join(&DCLabel::bottom()), l.clone());
        prop_assert_eq!(l.meet(&<DCLabel as Top>::top()), l);
    }

    /// Property: bottom flows everywhere, everything flows to top
    #[test]
    fn prop_label_bounds(l in arb_label()) {
        prop_assert!(can_flow_to(&<DCLabel as Bottom>::bottom(), &l));
        prop_assert!(can_flow_to(&l, &DCLabel::top()));
    }

    /// Property: can_flow_to is reflexive and transitive
    #[test]
    fn prop_flow_preorder(a in arb_label(), b in arb_label(), c in arb_label()) {
        prop_assert!(a.can_flow_to(&a));
        if a.can_flow_to(&b) && b.can_flow_to(&c) {
            prop_assert!(a.can_flow_to(&c));
        }
    }

    /// Property: mutual flow means equal labels
    #[test]
    fn prop_flow_antisymmetric(a in arb_label(), b in arb_label()) {
        if a.can_flow_to(&b) && b.can_flow_to(&a) {
            prop_assert_eq!(a, b);
        }
    }

    /// Property: lub is an upper bound, glb a lower bound
    #[test]
    fn prop_lub_glb_bounds(a in arb_label(), b in arb_label()) {
        let joined = a.lub(&b);
        prop_assert!(a.can_flow_to(&joined));
        prop_assert!(b.can_flow_to(&joined));

        let met = a.glb(&b);
        prop_assert!(met.can_flow_to(&a));
        prop_assert!(met.can_flow_to(&b));
    }

    /// Property: lub is the least upper bound
    #[test]
    fn prop_lub_is_least(a in arb_label(), b in arb_label(), c in arb_label()) {
        if a.can_flow_to(&c) && b.can_flow_to(&c) {
            prop_assert!(a.lub(&b).can_flow_to(&c));
        }
        if c.can_flow_to(&a) && c.can_flow_to(&b) {
            prop_assert!(c.can_flow_to(&a.glb(&b)));
        }
    }

    /// Property: construction reduces both components
    #[test]
    fn prop_label_components_reduced(s in arb_component(), i in arb_component()) {
        let label = DCLabel::new(s.clone(), i.clone());
        prop_assert!(label.secrecy().is_reduced());
        prop_assert!(label.integrity().is_reduced());
        prop_assert_eq!(label.secrecy(), &s.reduce());
        prop_assert_eq!(label.integrity(), &i.reduce());
    }

    /// Property: rendered labels parse back to the same label
    #[test]
    fn prop_label_text_form(l in arb_label()) {
        let parsed: DCLabel = l.to_string().parse().unwrap();
        prop_assert_eq!(parsed, l);
    }
}

#[test]
fn test_in_place_forms_match_pure_forms() {
    support::init_tracing();

    let a = DCLabel::new(
        Component::from_clause(["alice", "bob"].into_iter().collect()),
        Component::dc_true(),
    );
    let b = DCLabel::new(
        Component::dc_true(),
        Component::from_clause(["carol"].into_iter().collect()),
    );

    let mut joined = a.clone();
    joined.lub_assign(&b);
    assert_eq!(joined, a.lub(&b));

    let mut met = a.clone();
    met.glb_assign(&b);
    assert_eq!(met, a.glb(&b));
}
