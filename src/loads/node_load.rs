//! Nodal loads - forces and a moment applied directly to a node

use serde::{Deserialize, Serialize};

/// A load applied directly to a node
///
/// Components are given in the global frame: force along x, force along z
/// (positive downward), and an in-plane moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Force in x direction
    pub fx: f64,
    /// Force in z direction
    pub fz: f64,
    /// In-plane moment
    pub m: f64,
}

impl NodeLoad {
    /// Create a node load with all components
    pub fn new(fx: f64, fz: f64, m: f64) -> Self {
        Self { fx, fz, m }
    }

    /// Create a load in x direction
    pub fn fx(value: f64) -> Self {
        Self::new(value, 0.0, 0.0)
    }

    /// Create a load in z direction
    pub fn fz(value: f64) -> Self {
        Self::new(0.0, value, 0.0)
    }

    /// Create a moment-only load
    pub fn moment(value: f64) -> Self {
        Self::new(0.0, 0.0, value)
    }

    /// Get the load as an array [fx, fz, m]
    pub fn as_array(&self) -> [f64; 3] {
        [self.fx, self.fz, self.m]
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            fx: self.fx * factor,
            fz: self.fz * factor,
            m: self.m * factor,
        }
    }
}

impl Default for NodeLoad {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
