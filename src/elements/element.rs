//! Beam-column element - 2D frame element combining extension and bending
//!
//! Each element connects two nodes and contributes a 6x6 stiffness block to
//! the global system. The local formulation is an Euler-Bernoulli beam-column
//! with axial stiffness EA/L decoupled from the bending terms; the global
//! matrix follows from the orientation transform cached at creation.

use serde::{Deserialize, Serialize};

use crate::elements::{Node, NodeId, Section};
use crate::error::{FrameError, FrameResult};
use crate::loads::DistributedLoad;
use crate::math::{self, Mat6, Vec6};

/// Index of an element within its owning [`Model`](crate::model::Model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Get the underlying arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// A 2D beam-column element between two nodes
///
/// Geometry (length and orientation) is derived from the node coordinates at
/// creation time; nodes are treated as immutable in position afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// First end node
    pub i_node: NodeId,
    /// Second end node
    pub j_node: NodeId,

    /// Section properties, required before stiffness queries
    section: Option<Section>,

    /// Cached element length
    length: f64,
    /// Cosine of the orientation angle
    cos: f64,
    /// Sine of the orientation angle
    sin: f64,

    /// Global DOF indices of both end nodes, i-node triple first
    dofs: [usize; 6],

    /// Accumulated local line load [qx, qz]
    q: [f64; 2],
}

impl Element {
    /// Create an element connecting two nodes
    ///
    /// Fails with [`FrameError::InvalidGeometry`] for coincident nodes.
    pub(crate) fn new(i_node: NodeId, j_node: NodeId, i: &Node, j: &Node) -> FrameResult<Self> {
        let length = i.distance_to(j);
        if length < 1e-10 {
            return Err(FrameError::InvalidGeometry(format!(
                "element connecting nodes #{} and #{} has zero length",
                i.index(),
                j.index()
            )));
        }

        // Angle measured with z positive downward
        let angle = (-(j.z - i.z)).atan2(j.x - i.x);

        let di = i.dofs();
        let dj = j.dofs();

        Ok(Self {
            i_node,
            j_node,
            section: None,
            length,
            cos: angle.cos(),
            sin: angle.sin(),
            dofs: [di[0], di[1], di[2], dj[0], dj[1], dj[2]],
            q: [0.0; 2],
        })
    }

    /// Assign section properties
    pub fn set_section(&mut self, section: Section) {
        self.section = Some(section);
    }

    /// Get the assigned section, if any
    pub fn section(&self) -> Option<&Section> {
        self.section.as_ref()
    }

    /// Element length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Orientation angle in radians
    pub fn angle(&self) -> f64 {
        self.sin.atan2(self.cos)
    }

    /// Accumulated local line load [qx, qz]
    pub fn line_load(&self) -> [f64; 2] {
        self.q
    }

    /// Global DOF indices for scatter of the stiffness block
    ///
    /// The i-node triple comes first, then the j-node triple.
    pub fn global_dofs(&self) -> [usize; 6] {
        self.dofs
    }

    /// Local-to-global transformation matrix for this element's orientation
    pub fn transformation(&self) -> Mat6 {
        math::beam_transformation(self.cos, self.sin)
    }

    /// Element stiffness matrix in the global coordinate frame
    ///
    /// Fails with [`FrameError::SectionNotSet`] when no section was assigned.
    pub fn stiffness(&self) -> FrameResult<Mat6> {
        let section = self.section.as_ref().ok_or(FrameError::SectionNotSet)?;
        let k_local = math::beam_local_stiffness(section.ea, section.ei, self.length);
        let t = self.transformation();
        Ok(t.transpose() * k_local * t)
    }

    /// Record a line load for force recovery
    pub(crate) fn add_line_load(&mut self, load: &DistributedLoad) {
        self.q[0] += load.qx;
        self.q[1] += load.qz;
    }

    /// Equivalent end forces of a line load, in the global frame
    ///
    /// The consistent local end-force vector of the load is rotated to global
    /// coordinates; the two halves belong on the i- and j-node respectively.
    pub fn equivalent_end_forces(&self, load: &DistributedLoad) -> Vec6 {
        let f_local = load.local_end_forces(self.length);
        self.transformation().transpose() * f_local
    }

    /// Transform element-level global displacements into the local frame
    pub fn local_displacements(&self, u_element: &Vec6) -> Vec6 {
        self.transformation() * u_element
    }

    /// Bending moments at `num_points` evenly spaced stations along the element
    ///
    /// `u_element` holds the element's end displacements in global
    /// coordinates (see [`Model::element_displacements`](crate::model::Model::element_displacements)).
    /// The recorded line load contributes the particular part of the moment
    /// distribution.
    pub fn bending_moments(&self, u_element: &Vec6, num_points: usize) -> FrameResult<Vec<f64>> {
        let section = self.section.as_ref().ok_or(FrameError::SectionNotSet)?;
        if num_points < 2 {
            return Err(FrameError::InvalidInput(
                "num_points must be at least 2".to_string(),
            ));
        }

        let l = self.length;
        let q = self.q[1];
        let ei = section.ei;

        let ul = self.local_displacements(u_element);
        let (w_1, phi_1, w_2, phi_2) = (ul[1], ul[2], ul[4], ul[5]);

        let mut moments = Vec::with_capacity(num_points);
        for point in 0..num_points {
            let x = l * point as f64 / (num_points - 1) as f64;
            let m = (-l.powi(5) * q + 6.0 * l.powi(4) * q * x
                - 6.0 * q * x * x * l.powi(3)
                - 48.0 * (phi_1 + phi_2 / 2.0) * ei * l * l
                + 72.0 * ei * ((phi_1 + phi_2) * x + w_1 - w_2) * l
                - 144.0 * x * ei * (w_1 - w_2))
                / 12.0
                / l.powi(3);
            moments.push(m);
        }

        Ok(moments)
    }

    /// Axial and transverse displacements along the element
    ///
    /// Returns `(u, w)` pairs at `num_points` evenly spaced stations in the
    /// local frame: Hermite interpolation of the end displacements plus the
    /// particular solution of the recorded line load.
    pub fn displaced_shape(
        &self,
        u_element: &Vec6,
        num_points: usize,
    ) -> FrameResult<Vec<(f64, f64)>> {
        let section = self.section.as_ref().ok_or(FrameError::SectionNotSet)?;
        if num_points < 2 {
            return Err(FrameError::InvalidInput(
                "num_points must be at least 2".to_string(),
            ));
        }

        let l = self.length;
        let q = self.q[1];
        let q_x = self.q[0];
        let ei = section.ei;
        let ea = section.ea;

        let ul = self.local_displacements(u_element);
        let (u_1, w_1, phi_1, u_2, w_2, phi_2) = (ul[0], ul[1], ul[2], ul[3], ul[4], ul[5]);

        let mut shape = Vec::with_capacity(num_points);
        for point in 0..num_points {
            let x = l * point as f64 / (num_points - 1) as f64;

            let u = q_x * (-l * x / (2.0 * ea) + x * x / (2.0 * ea))
                + u_1 * (1.0 - x / l)
                + u_2 * x / l;

            let w = phi_1 * (-x + 2.0 * x * x / l - x.powi(3) / (l * l))
                + phi_2 * (x * x / l - x.powi(3) / (l * l))
                + q * (l * l * x * x / (24.0 * ei) - l * x.powi(3) / (12.0 * ei)
                    + x.powi(4) / (24.0 * ei))
                + w_1 * (1.0 - 3.0 * x * x / (l * l) + 2.0 * x.powi(3) / l.powi(3))
                + w_2 * (3.0 * x * x / (l * l) - 2.0 * x.powi(3) / l.powi(3));

            shape.push((u, w));
        }

        Ok(shape)
    }
}
