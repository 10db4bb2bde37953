//! Model - 2D frame model container and solve orchestration
//!
//! The model owns the node and element arenas. DOF numbering is a consequence
//! of insertion order, so independent models never collide; handles issued by
//! one model are meaningless in another.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constrainer::Constrainer;
use crate::elements::{Element, ElementId, Node, NodeId, Section};
use crate::error::{FrameError, FrameResult};
use crate::loads::{DistributedLoad, NodeLoad};
use crate::math::{self, Mat, Vec as DVec, Vec6};
use crate::results::Solution;

/// The main 2D frame model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    /// Nodes in creation order; index i owns global DOFs 3i..3i+2
    nodes: Vec<Node>,
    /// Elements in creation order
    elements: Vec<Element>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all nodes and elements and restart DOF numbering at zero
    ///
    /// Idempotent; previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elements.clear();
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node at the given coordinates
    ///
    /// The node receives the next sequential index and the contiguous global
    /// DOF triple `[3i, 3i+1, 3i+2]`.
    pub fn add_node(&mut self, x: f64, z: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(x, z, id.index()));
        id
    }

    /// Add an element connecting two existing nodes
    ///
    /// Length and orientation are computed from the node coordinates at this
    /// point and cached. Coincident nodes are rejected.
    pub fn add_element(&mut self, i_node: NodeId, j_node: NodeId) -> FrameResult<ElementId> {
        let i = self.node(i_node)?;
        let j = self.node(j_node)?;
        let element = Element::new(i_node, j_node, i, j)?;

        let id = ElementId(self.elements.len());
        self.elements.push(element);
        Ok(id)
    }

    /// Assign section properties to an element
    pub fn set_section(&mut self, id: ElementId, section: Section) -> FrameResult<()> {
        let element = self
            .elements
            .get_mut(id.0)
            .ok_or(FrameError::ElementNotFound(id.0))?;
        element.set_section(section);
        Ok(())
    }

    /// Accumulate a load onto a node
    pub fn add_node_load(&mut self, id: NodeId, load: NodeLoad) -> FrameResult<()> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(FrameError::NodeNotFound(id.0))?;
        node.add_load(&load);
        Ok(())
    }

    /// Apply a uniform line load to an element
    ///
    /// The consistent equivalent end forces are accumulated onto the two end
    /// nodes; the element records the line load for force recovery.
    pub fn add_distributed_load(&mut self, id: ElementId, load: DistributedLoad) -> FrameResult<()> {
        let element = self
            .elements
            .get(id.0)
            .ok_or(FrameError::ElementNotFound(id.0))?;

        let fer = element.equivalent_end_forces(&load);
        let (i_node, j_node) = (element.i_node, element.j_node);

        self.elements[id.0].add_line_load(&load);
        self.nodes[i_node.0].add_load(&NodeLoad::new(fer[0], fer[1], fer[2]));
        self.nodes[j_node.0].add_load(&NodeLoad::new(fer[3], fer[4], fer[5]));
        Ok(())
    }

    // ========================
    // Access Methods
    // ========================

    /// Get a node by handle
    pub fn node(&self, id: NodeId) -> FrameResult<&Node> {
        self.nodes.get(id.0).ok_or(FrameError::NodeNotFound(id.0))
    }

    /// Get an element by handle
    pub fn element(&self, id: ElementId) -> FrameResult<&Element> {
        self.elements
            .get(id.0)
            .ok_or(FrameError::ElementNotFound(id.0))
    }

    /// Iterate over all nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all elements in creation order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Size of the global system (3 DOFs per node)
    pub fn num_dofs(&self) -> usize {
        3 * self.nodes.len()
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Assemble the global stiffness matrix and force vector
    ///
    /// Element stiffness blocks scatter-add at their global DOF index sets;
    /// nodal loads scatter-add at each node's DOF triple.
    pub fn assemble(&self) -> FrameResult<(Mat, DVec)> {
        let n_dofs = self.num_dofs();
        debug!(
            "assembling {} elements and {} nodes into a {} DOF system",
            self.elements.len(),
            self.nodes.len(),
            n_dofs
        );

        let mut k_global = Mat::zeros(n_dofs, n_dofs);
        let mut f_global = DVec::zeros(n_dofs);

        for element in &self.elements {
            let k = element.stiffness()?;
            math::scatter_add(&mut k_global, &element.global_dofs(), &k)?;
        }

        for node in &self.nodes {
            math::scatter_add_load(&mut f_global, &node.dofs(), &node.load())?;
        }

        Ok((k_global, f_global))
    }

    /// Assemble, constrain, and solve for the free-DOF displacements
    ///
    /// The reduced system must be nonsingular; a singular matrix means the
    /// constraints leave a rigid-body mode and is reported as
    /// [`FrameError::SingularMatrix`]. The returned [`Solution`] holds the
    /// full displacement vector (prescribed values at constrained DOFs) and
    /// the recovered support reactions.
    pub fn solve(&self, constrainer: &Constrainer) -> FrameResult<Solution> {
        let (k_global, f_global) = self.assemble()?;
        let (k_ff, f_f) = constrainer.constrain(&k_global, &f_global)?;

        if k_ff.nrows() == 0 {
            return Err(FrameError::AnalysisFailed(
                "no free degrees of freedom".to_string(),
            ));
        }

        debug!(
            "solving reduced system: {} free / {} constrained DOFs",
            k_ff.nrows(),
            constrainer.num_constrained()
        );

        let u_free = math::solve_linear_system(&k_ff, &f_f).ok_or(FrameError::SingularMatrix)?;

        let u_full = constrainer.expand(&u_free, self.num_dofs())?;
        let reactions = constrainer.support_reactions(&k_global, &u_full, &f_global)?;

        Ok(Solution::new(u_full, reactions))
    }

    /// Extract an element's 6-component end displacements from a solution
    ///
    /// The result feeds the element postprocessors
    /// ([`Element::bending_moments`], [`Element::displaced_shape`]).
    pub fn element_displacements(&self, id: ElementId, solution: &Solution) -> FrameResult<Vec6> {
        let element = self.element(id)?;
        math::gather_element(solution.displacements(), &element.global_dofs())
    }
}
