//! # Aura Labels
//!
//! Disjunction-category (DC) labels for decentralized information flow
//! control. A label is a pair of monotone CNF formulas over principals:
//!
//! - **Secrecy**: who must be present to read the data
//! - **Integrity**: who must have endorsed the data
//!
//! This crate computes the algebra only. Enforcement points ask
//! [`DCLabel::can_flow_to`] and combine labels with [`DCLabel::lub`] and
//! [`DCLabel::glb`]; nothing here intercepts data.
//!
//! ## Layers
//!
//! - [`Principal`]: opaque, ordered name
//! - [`Clause`]: disjunction over principals, implication is subset
//! - [`Component`]: conjunction of clauses or False, with implication,
//!   `and`/`or` and reduction to canonical form
//! - [`DCLabel`]: (secrecy, integrity) with the lattice operations
//!
//! ## Lattice Laws
//!
//! Labels form a bounded lattice under `can_flow_to`:
//! - **Join** (⊔ = lub): conjoin secrecy, disjoin integrity
//! - **Meet** (⊓ = glb): disjoin secrecy, conjoin integrity
//! - **Bottom** `<|True , |False>` flows everywhere; everything flows to
//!   **Top** `<|False , |True>`
//!
//! ## Usage
//!
//! ```rust
//! use aura_label::{Clause, Component, DCLabel};
//!
//! let alice = DCLabel::new(
//!     Component::from_clause(Clause::new(["alice"])),
//!     Component::dc_true(),
//! );
//! let bob = DCLabel::new(
//!     Component::from_clause(Clause::new(["bob"])),
//!     Component::dc_true(),
//! );
//!
//! // Combining both sources requires both readers
//! let combined = alice.lub(&bob);
//! assert_eq!(combined.to_string(), "<{[alice] /\\ [bob]} , |True>");
//! assert!(alice.can_flow_to(&combined));
//! assert!(!combined.can_flow_to(&alice));
//! ```

#![forbid(unsafe_code)]

pub mod clause;
pub mod component;
pub mod config;
pub mod errors;
pub mod label;
pub mod parse;
pub mod principal;
pub mod semilattice;

pub use clause::Clause;
pub use component::Component;
pub use config::ParserConfig;
pub use errors::{LabelError, LabelResult};
pub use label::{can_flow_to, glb, lub, DCLabel};
pub use parse::LabelParser;
pub use principal::Principal;
pub use semilattice::{Bottom, JoinSemilattice, MeetSemiLattice, Top};
