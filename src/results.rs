//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::elements::Node;
use crate::error::{FrameError, FrameResult};
use crate::math::Vec as DVec;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in x direction
    pub ux: f64,
    /// Displacement in z direction (positive downward)
    pub uz: f64,
    /// In-plane rotation
    pub phi: f64,
}

impl NodeDisplacement {
    /// Create from array [ux, uz, phi]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            ux: arr[0],
            uz: arr[1],
            phi: arr[2],
        }
    }

    /// Get the displacement as an array [ux, uz, phi]
    pub fn as_array(&self) -> [f64; 3] {
        [self.ux, self.uz, self.phi]
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.ux.powi(2) + self.uz.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction force in x direction
    pub fx: f64,
    /// Reaction force in z direction
    pub fz: f64,
    /// Reaction moment
    pub m: f64,
}

impl Reaction {
    /// Create from array [fx, fz, m]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fz: arr[1],
            m: arr[2],
        }
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fz.powi(2)).sqrt()
    }
}

/// Solved state of a model: full displacement vector plus support reactions
///
/// Constrained DOFs carry their prescribed displacement values; reactions are
/// zero at free DOFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    displacements: DVec,
    reactions: DVec,
}

impl Solution {
    pub(crate) fn new(displacements: DVec, reactions: DVec) -> Self {
        Self {
            displacements,
            reactions,
        }
    }

    /// Full global displacement vector (length 3N)
    pub fn displacements(&self) -> &DVec {
        &self.displacements
    }

    /// Full global reaction vector (length 3N, zero at free DOFs)
    pub fn reactions(&self) -> &DVec {
        &self.reactions
    }

    /// Displacement of a single global DOF
    pub fn dof_displacement(&self, dof: usize) -> FrameResult<f64> {
        if dof >= self.displacements.len() {
            return Err(FrameError::DimensionMismatch {
                expected: self.displacements.len(),
                found: dof,
            });
        }
        Ok(self.displacements[dof])
    }

    /// Displacement at a node
    pub fn node_displacement(&self, node: &Node) -> FrameResult<NodeDisplacement> {
        let dofs = node.dofs();
        if dofs[2] >= self.displacements.len() {
            return Err(FrameError::NodeNotFound(node.index()));
        }
        Ok(NodeDisplacement::from_array([
            self.displacements[dofs[0]],
            self.displacements[dofs[1]],
            self.displacements[dofs[2]],
        ]))
    }

    /// Reaction at a node
    pub fn node_reaction(&self, node: &Node) -> FrameResult<Reaction> {
        let dofs = node.dofs();
        if dofs[2] >= self.reactions.len() {
            return Err(FrameError::NodeNotFound(node.index()));
        }
        Ok(Reaction::from_array([
            self.reactions[dofs[0]],
            self.reactions[dofs[1]],
            self.reactions[dofs[2]],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_array_accessors() {
        let disp = NodeDisplacement::from_array([3.0, 4.0, 0.1]);
        assert_relative_eq!(disp.translation_magnitude(), 5.0);
        assert_eq!(disp.as_array(), [3.0, 4.0, 0.1]);

        let reaction = Reaction::from_array([-6.0, 8.0, 2.0]);
        assert_relative_eq!(reaction.force_magnitude(), 10.0);
    }

    #[test]
    fn test_solution_bounds_are_checked() {
        let solution = Solution::new(DVec::zeros(3), DVec::zeros(3));
        assert!(solution.dof_displacement(2).is_ok());
        assert!(solution.dof_displacement(3).is_err());

        let outside = Node::new(0.0, 0.0, 1);
        assert!(solution.node_displacement(&outside).is_err());
    }
}
