//! Semilattice traits
//!
//! The same vocabulary the rest of Aura uses for facts (⊔) and capabilities
//! (⊓). Labels form a bounded lattice, so they implement all four.
//!
//! Laws every implementation must satisfy:
//! - **Associative**: (a ⊔ b) ⊔ c = a ⊔ (b ⊔ c)
//! - **Commutative**: a ⊔ b = b ⊔ a
//! - **Idempotent**: a ⊔ a = a
//! - **Identity**: a ⊔ ⊥ = a and a ⊓ ⊤ = a

/// Join-semilattice: least upper bound
pub trait JoinSemilattice: Sized {
    /// Combine two values into the least value above both
    fn join(&self, other: &Self) -> Self;
}

/// Meet-semilattice: greatest lower bound
pub trait MeetSemiLattice: Sized {
    /// Combine two values into the greatest value below both
    fn meet(&self, other: &Self) -> Self;
}

/// Least element (⊥)
pub trait Bottom {
    /// Identity for join
    fn bottom() -> Self;
}

/// Greatest element (⊤)
pub trait Top {
    /// Identity for meet
    fn top() -> Self;
}
