//! Distributed line loads on elements

use serde::{Deserialize, Serialize};

use crate::math::Vec6;

/// A uniform line load on an element, in the element's local frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity along the element axis (force per unit length)
    pub qx: f64,
    /// Intensity transverse to the element axis (force per unit length)
    pub qz: f64,
}

impl DistributedLoad {
    /// Create a line load with axial and transverse components
    pub fn new(qx: f64, qz: f64) -> Self {
        Self { qx, qz }
    }

    /// Create a purely axial line load
    pub fn axial(qx: f64) -> Self {
        Self::new(qx, 0.0)
    }

    /// Create a purely transverse line load
    pub fn transverse(qz: f64) -> Self {
        Self::new(0.0, qz)
    }

    /// Consistent equivalent end forces in the element's local frame
    ///
    /// Half the resultant goes to each end; the transverse component also
    /// produces the fixed-end moment pair qz·L²/12.
    pub fn local_end_forces(&self, length: f64) -> Vec6 {
        let l = length;
        Vec6::from_row_slice(&[
            0.5 * self.qx * l,
            0.5 * self.qz * l,
            -self.qz * l * l / 12.0,
            0.5 * self.qx * l,
            0.5 * self.qz * l,
            self.qz * l * l / 12.0,
        ])
    }

    /// Total resultant force [axial, transverse] over a given length
    pub fn resultant(&self, length: f64) -> [f64; 2] {
        [self.qx * length, self.qz * length]
    }
}
