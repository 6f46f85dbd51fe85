//! Components: conjunctions of clauses
//!
//! A component is a monotone CNF formula over principals, or the constant
//! False. The empty conjunction is True. Components carry the implication
//! procedure, the boolean combinators and the reduction to a subsumption-free
//! canonical form. Reduced formulas are equal exactly when they are
//! equivalent, except that `{[]}` stays distinct from `|False`.
//!
//! ## Implication
//!
//! General CNF implication is co-NP complete, but every clause here is a
//! negation-free disjunction. For such formulas `P ⇒ Q` holds exactly when
//! every clause of `Q` is subsumed by (is a superset of) some clause of `P`,
//! which is a plain subset-cover check.

use crate::clause::Clause;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr};
use tracing::trace;

/// Secrecy or integrity formula of a label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    /// The unsatisfiable formula
    False,
    /// Conjunction of clauses; the empty set encodes True
    Formula(BTreeSet<Clause>),
}

impl Component {
    /// The constant False
    pub fn dc_false() -> Self {
        Component::False
    }

    /// The constant True (empty conjunction)
    pub fn dc_true() -> Self {
        Component::Formula(BTreeSet::new())
    }

    /// Singleton formula from one clause
    pub fn from_clause(clause: Clause) -> Self {
        Component::Formula(BTreeSet::from([clause]))
    }

    /// Formula from an explicit set of clauses. No reduction is applied.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Component::Formula(clauses.into_iter().collect())
    }

    /// Is the component the constant False
    pub fn is_false(&self) -> bool {
        matches!(self, Component::False)
    }

    /// Is the component the constant True
    pub fn is_true(&self) -> bool {
        matches!(self, Component::Formula(clauses) if clauses.is_empty())
    }

    /// Clauses in canonical order; False has none
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        let clauses = match self {
            Component::False => None,
            Component::Formula(clauses) => Some(clauses.iter()),
        };
        clauses.into_iter().flatten()
    }

    /// Number of clauses in the conjunction (0 for both constants)
    pub fn clause_count(&self) -> usize {
        match self {
            Component::False => 0,
            Component::Formula(clauses) => clauses.len(),
        }
    }

    /// Check if this formula logically implies another
    pub fn implies(&self, other: &Component) -> bool {
        match (self, other) {
            (Component::False, _) => true,
            (_, Component::False) => false,
            (_, other) if other.is_true() => true,
            (this, _) if this.is_true() => false,
            (Component::Formula(ours), Component::Formula(theirs)) => theirs
                .iter()
                .all(|q| ours.iter().any(|p| p.implies(q))),
        }
    }

    /// Conjunction: union of the clause sets
    pub fn and(&self, other: &Component) -> Component {
        match (self, other) {
            (Component::False, _) | (_, Component::False) => Component::False,
            (Component::Formula(ours), Component::Formula(theirs)) => {
                Component::Formula(ours.union(theirs).cloned().collect())
            }
        }
    }

    /// Disjunction, distributing `(∧Pi) ∨ (∧Qj) ≡ ∧i,j (Pi ∨ Qj)`
    pub fn or(&self, other: &Component) -> Component {
        if self.is_true() || other.is_true() {
            return Component::dc_true();
        }
        match (self, other) {
            (_, Component::False) => self.clone(),
            (Component::False, _) => other.clone(),
            (Component::Formula(ours), Component::Formula(theirs)) => Component::Formula(
                ours.iter()
                    .flat_map(|p| theirs.iter().map(move |q| p.union(q)))
                    .collect(),
            ),
        }
    }

    /// Remove every clause implied by a distinct clause of the same formula.
    ///
    /// Clauses are visited smallest first, so a clause can only be implied by
    /// one already kept. The surviving antichain is unique. The empty clause
    /// subsumes every other clause, so `{[] /\ [a]}` reduces to `{[]}`.
    pub fn reduce(&self) -> Component {
        let clauses = match self {
            Component::False => return Component::False,
            Component::Formula(clauses) if clauses.is_empty() => return Component::dc_true(),
            Component::Formula(clauses) => clauses,
        };

        let mut kept: Vec<&Clause> = Vec::with_capacity(clauses.len());
        for q in clauses {
            if !kept.iter().any(|p| p.implies(q)) {
                kept.push(q);
            }
        }

        trace!(before = clauses.len(), after = kept.len(), "reduced component");
        Component::Formula(kept.into_iter().cloned().collect())
    }

    /// Whether no clause is implied by a distinct clause of the formula
    pub fn is_reduced(&self) -> bool {
        match self {
            Component::False => true,
            Component::Formula(clauses) => clauses
                .iter()
                .all(|q| !clauses.iter().any(|p| p != q && p.implies(q))),
        }
    }

    /// In-place conjunction
    pub fn and_assign(&mut self, other: &Component) {
        *self = self.and(other);
    }

    /// In-place disjunction
    pub fn or_assign(&mut self, other: &Component) {
        *self = self.or(other);
    }

    /// In-place reduction
    pub fn reduce_in_place(&mut self) {
        *self = self.reduce();
    }
}

impl Default for Component {
    fn default() -> Self {
        Component::dc_false()
    }
}

impl From<Clause> for Component {
    fn from(clause: Clause) -> Self {
        Component::from_clause(clause)
    }
}

impl FromIterator<Clause> for Component {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Component::from_clauses(iter)
    }
}

impl BitAnd for &Component {
    type Output = Component;

    fn bitand(self, rhs: &Component) -> Component {
        self.and(rhs)
    }
}

impl BitOr for &Component {
    type Output = Component;

    fn bitor(self, rhs: &Component) -> Component {
        self.or(rhs)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::False => f.write_str("|False"),
            Component::Formula(clauses) if clauses.is_empty() => f.write_str("|True"),
            Component::Formula(clauses) => {
                f.write_str("{")?;
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" /\\ ")?;
                    }
                    write!(f, "{clause}")?;
                }
                f.write_str("}")
            }
        }
    }
}
