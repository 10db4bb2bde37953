//! Frame Solver - a native Rust 2D frame analysis engine
//!
//! This library implements the direct stiffness method for plane frames:
//! - Nodes with three DOFs (x-translation, z-translation, rotation)
//! - Beam-column elements combining extension and Euler-Bernoulli bending
//! - Boundary-condition elimination with prescribed displacements
//! - Dense linear solution for displacements and support reactions
//! - Element-level recovery of bending moments and displaced shapes
//!
//! Coordinates use x to the right and z positive downward; elements may take
//! any orientation in the plane.
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut model = Model::new();
//!
//! // A 5 m cantilever beam
//! let n1 = model.add_node(0.0, 0.0);
//! let n2 = model.add_node(5.0, 0.0);
//!
//! let beam = model.add_element(n1, n2).unwrap();
//! model.set_section(beam, Section::new(15000.0, 2.0e6)).unwrap();
//!
//! // 10 kN downward at the tip
//! model.add_node_load(n2, NodeLoad::fz(10.0)).unwrap();
//!
//! // Clamp the left end
//! let mut constrainer = Constrainer::new();
//! constrainer.fix_node(model.node(n1).unwrap()).unwrap();
//!
//! let solution = model.solve(&constrainer).unwrap();
//! let tip = solution.node_displacement(model.node(n2).unwrap()).unwrap();
//! assert!(tip.uz > 0.0);
//! ```

pub mod constrainer;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::constrainer::Constrainer;
    pub use crate::elements::{Dof, Element, ElementId, Node, NodeId, Section};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{DistributedLoad, NodeLoad};
    pub use crate::model::Model;
    pub use crate::results::{NodeDisplacement, Reaction, Solution};
}
