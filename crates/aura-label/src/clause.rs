//! Clauses: disjunctions of principals
//!
//! A clause is satisfied when at least one of its principals holds. Clauses
//! are plain values; two clauses are equal exactly when their principal sets
//! are equal.

use crate::principal::Principal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A disjunction `p1 \/ p2 \/ ... \/ pn` over a set of principals.
///
/// The empty clause is the disjunction no principal satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Clause {
    principals: BTreeSet<Principal>,
}

impl Clause {
    /// Create a clause from a collection of principals; duplicates collapse
    pub fn new<I, P>(principals: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Principal>,
    {
        Self {
            principals: principals.into_iter().map(Into::into).collect(),
        }
    }

    /// The unsatisfiable clause `[]`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Principals in ascending order
    pub fn principals(&self) -> impl Iterator<Item = &Principal> {
        self.principals.iter()
    }

    /// Number of distinct principals
    pub fn len(&self) -> usize {
        self.principals.len()
    }

    /// True for the unsatisfiable clause
    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }

    /// Whether `principal` appears in this disjunction
    pub fn contains(&self, principal: &Principal) -> bool {
        self.principals.contains(principal)
    }

    /// Check if this clause implies another clause
    ///
    /// For negation-free disjunctions this is exactly the subset relation:
    /// whichever principal satisfies the smaller disjunction also satisfies
    /// the larger one.
    pub fn implies(&self, other: &Clause) -> bool {
        self.principals.is_subset(&other.principals)
    }

    /// Disjunction of two clauses (union of their principals)
    pub fn union(&self, other: &Clause) -> Clause {
        Self {
            principals: self.principals.union(&other.principals).cloned().collect(),
        }
    }
}

impl Ord for Clause {
    /// Smaller clauses first; equal sizes compare element-wise ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        self.principals
            .len()
            .cmp(&other.principals.len())
            .then_with(|| self.principals.cmp(&other.principals))
    }
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Principal> for Clause {
    fn from(principal: Principal) -> Self {
        Self::new([principal])
    }
}

impl<P: Into<Principal>> FromIterator<P> for Clause {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, principal) in self.principals.iter().enumerate() {
            if i > 0 {
                f.write_str(" \\/ ")?;
            }
            write!(f, "{principal}")?;
        }
        f.write_str("]")
    }
}
