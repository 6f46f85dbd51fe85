//! DC labels
//!
//! A label pairs a secrecy component (who may read) with an integrity
//! component (who has endorsed). Both components are kept reduced, so label
//! equality is structural equality of the reduced components.
//!
//! The flow relation orders labels from least to most restrictive:
//!
//! ```text
//! bottom <|True , |False>  ⊑  public <|True , |True>  ⊑  top <|False , |True>
//! ```

use crate::component::Component;
use crate::semilattice::{Bottom, JoinSemilattice, MeetSemiLattice, Top};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A point in the information-flow lattice
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LabelParts", into = "LabelParts"))]
pub struct DCLabel {
    secrecy: Component,
    integrity: Component,
}

impl DCLabel {
    /// Create a label, reducing both components
    pub fn new(secrecy: Component, integrity: Component) -> Self {
        Self {
            secrecy: secrecy.reduce(),
            integrity: integrity.reduce(),
        }
    }

    /// Least restrictive label: public data with no integrity guarantee
    pub fn bottom() -> Self {
        Self {
            secrecy: Component::dc_true(),
            integrity: Component::dc_false(),
        }
    }

    /// Most restrictive label: readable by no one, maximal trust
    pub fn top() -> Self {
        Self {
            secrecy: Component::dc_false(),
            integrity: Component::dc_true(),
        }
    }

    /// No secrecy restriction and no integrity claim
    pub fn public() -> Self {
        Self {
            secrecy: Component::dc_true(),
            integrity: Component::dc_true(),
        }
    }

    /// Secrecy component
    pub fn secrecy(&self) -> &Component {
        &self.secrecy
    }

    /// Integrity component
    pub fn integrity(&self) -> &Component {
        &self.integrity
    }

    /// Split into `(secrecy, integrity)`
    pub fn into_parts(self) -> (Component, Component) {
        (self.secrecy, self.integrity)
    }

    /// Can data labeled `self` flow to a context labeled `target`
    ///
    /// The target's secrecy must imply the source's, and the source's
    /// integrity must imply the target's.
    pub fn can_flow_to(&self, target: &DCLabel) -> bool {
        let secrecy_ok = target.secrecy.implies(&self.secrecy);
        let integrity_ok = self.integrity.implies(&target.integrity);
        if !(secrecy_ok && integrity_ok) {
            debug!(
                source = %self,
                target = %target,
                secrecy_ok,
                integrity_ok,
                "label flow denied"
            );
        }
        secrecy_ok && integrity_ok
    }

    /// Join: conjoin secrecy, disjoin integrity
    pub fn lub(&self, other: &DCLabel) -> DCLabel {
        DCLabel::new(
            self.secrecy.and(&other.secrecy),
            self.integrity.or(&other.integrity),
        )
    }

    /// Meet: disjoin secrecy, conjoin integrity
    pub fn glb(&self, other: &DCLabel) -> DCLabel {
        DCLabel::new(
            self.secrecy.or(&other.secrecy),
            self.integrity.and(&other.integrity),
        )
    }

    /// Replace `self` with `self ⊔ other`
    pub fn lub_assign(&mut self, other: &DCLabel) {
        *self = self.lub(other);
    }

    /// Replace `self` with `self ⊓ other`
    pub fn glb_assign(&mut self, other: &DCLabel) {
        *self = self.glb(other);
    }
}

/// Two-argument form of [`DCLabel::can_flow_to`]
pub fn can_flow_to(source: &DCLabel, target: &DCLabel) -> bool {
    source.can_flow_to(target)
}

/// Two-argument form of [`DCLabel::lub`]
pub fn lub(l1: &DCLabel, l2: &DCLabel) -> DCLabel {
    l1.lub(l2)
}

/// Two-argument form of [`DCLabel::glb`]
pub fn glb(l1: &DCLabel, l2: &DCLabel) -> DCLabel {
    l1.glb(l2)
}

impl Default for DCLabel {
    fn default() -> Self {
        DCLabel::public()
    }
}

impl From<(Component, Component)> for DCLabel {
    fn from((secrecy, integrity): (Component, Component)) -> Self {
        DCLabel::new(secrecy, integrity)
    }
}

impl fmt::Display for DCLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} , {}>", self.secrecy, self.integrity)
    }
}

// === Semilattice Implementations ===

impl JoinSemilattice for DCLabel {
    fn join(&self, other: &Self) -> Self {
        self.lub(other)
    }
}

impl MeetSemiLattice for DCLabel {
    fn meet(&self, other: &Self) -> Self {
        self.glb(other)
    }
}

impl Bottom for DCLabel {
    fn bottom() -> Self {
        Self::new(Component::dc_true(), Component::dc_false())
    }
}

impl Top for DCLabel {
    fn top() -> Self {
        Self::new(Component::dc_false(), Component::dc_true())
    }
}

// Deserialized labels go through `DCLabel::new` and come out reduced.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct LabelParts {
    secrecy: Component,
    integrity: Component,
}

#[cfg(feature = "serde")]
impl From<LabelParts> for DCLabel {
    fn from(parts: LabelParts) -> Self {
        DCLabel::new(parts.secrecy, parts.integrity)
    }
}

#[cfg(feature = "serde")]
impl From<DCLabel> for LabelParts {
    fn from(label: DCLabel) -> Self {
        let (secrecy, integrity) = label.into_parts();
        Self { secrecy, integrity }
    }
}
