//! Node - a point in the 2D frame with three degrees of freedom

use serde::{Deserialize, Serialize};

use crate::loads::NodeLoad;

/// Index of a node within its owning [`Model`](crate::model::Model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Get the underlying arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// A nodal degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along the global x axis
    TranslationX,
    /// Translation along the global z axis (positive downward)
    TranslationZ,
    /// In-plane rotation
    Rotation,
}

impl Dof {
    /// All three DOFs in local ordering
    pub const ALL: [Dof; 3] = [Dof::TranslationX, Dof::TranslationZ, Dof::Rotation];

    /// Local index of this DOF within a node's triple (0, 1, or 2)
    pub fn index(self) -> usize {
        match self {
            Dof::TranslationX => 0,
            Dof::TranslationZ => 1,
            Dof::Rotation => 2,
        }
    }
}

/// A 2D node with coordinates, a global DOF triple, and an accumulated load
///
/// Nodes are created through [`Model::add_node`](crate::model::Model::add_node),
/// which assigns the contiguous DOF block `[3i, 3i+1, 3i+2]` in creation order.
/// Coordinates are immutable after creation; only the load vector accumulates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Z coordinate (positive downward)
    pub z: f64,

    /// Global DOF indices [x-translation, z-translation, rotation]
    dofs: [usize; 3],

    /// Accumulated nodal load [fx, fz, m]
    load: [f64; 3],
}

impl Node {
    /// Create a node at the given coordinates with the DOF triple for `index`
    pub(crate) fn new(x: f64, z: f64, index: usize) -> Self {
        Self {
            x,
            z,
            dofs: [3 * index, 3 * index + 1, 3 * index + 2],
            load: [0.0; 3],
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.z]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Creation-order index of this node
    pub fn index(&self) -> usize {
        self.dofs[0] / 3
    }

    /// Global DOF indices [x-translation, z-translation, rotation]
    pub fn dofs(&self) -> [usize; 3] {
        self.dofs
    }

    /// Global index of a single DOF
    pub fn dof(&self, dof: Dof) -> usize {
        self.dofs[dof.index()]
    }

    /// Current accumulated load [fx, fz, m]
    pub fn load(&self) -> [f64; 3] {
        self.load
    }

    /// Accumulate a load onto this node
    pub fn add_load(&mut self, load: &NodeLoad) {
        let components = load.as_array();
        for i in 0..3 {
            self.load[i] += components[i];
        }
    }
}
