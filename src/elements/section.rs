//! Section properties for beam-column elements

use serde::{Deserialize, Serialize};

/// Cross-section stiffness properties for a 2D beam-column element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Flexural stiffness E·I
    pub ei: f64,
    /// Axial stiffness E·A
    pub ea: f64,
}

impl Section {
    /// Near-rigid stiffness used when a property is left unspecified
    pub const RIGID: f64 = 1.0e20;

    /// Create a section with both properties
    pub fn new(ei: f64, ea: f64) -> Self {
        Self { ei, ea }
    }

    /// Create a section with flexural stiffness only (axially near-rigid)
    pub fn bending(ei: f64) -> Self {
        Self {
            ei,
            ea: Self::RIGID,
        }
    }

    /// Create a section with axial stiffness only (flexurally near-rigid)
    pub fn axial(ea: f64) -> Self {
        Self {
            ei: Self::RIGID,
            ea,
        }
    }
}

impl Default for Section {
    /// A near-rigid section in both bending and extension
    fn default() -> Self {
        Self {
            ei: Self::RIGID,
            ea: Self::RIGID,
        }
    }
}
