//! Boundary-condition elimination for the global system
//!
//! The [`Constrainer`] collects prescribed degrees of freedom, reduces an
//! assembled system to its free DOFs, and recovers support reactions once a
//! solution is available. Reduction is a pure function of its inputs, so the
//! same constrainer can be applied to any number of assembled systems.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::elements::{Dof, Node};
use crate::error::{FrameError, FrameResult};
use crate::math::{Mat, Vec as DVec};

/// Records constrained DOFs and their prescribed values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Constrainer {
    /// Constrained global DOF index -> prescribed displacement
    constraints: BTreeMap<usize, f64>,
}

impl Constrainer {
    /// Create an empty constrainer
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully restrain one DOF of a node (prescribed value 0)
    ///
    /// Constraining a DOF that is already constrained is rejected with
    /// [`FrameError::DuplicateConstraint`].
    pub fn fix_dof(&mut self, node: &Node, dof: Dof) -> FrameResult<()> {
        self.prescribe_dof(node, dof, 0.0)
    }

    /// Restrain one DOF of a node to a prescribed displacement value
    pub fn prescribe_dof(&mut self, node: &Node, dof: Dof, value: f64) -> FrameResult<()> {
        let global_dof = node.dof(dof);
        if self.constraints.contains_key(&global_dof) {
            return Err(FrameError::DuplicateConstraint(global_dof));
        }
        self.constraints.insert(global_dof, value);
        Ok(())
    }

    /// Fully restrain all three DOFs of a node
    pub fn fix_node(&mut self, node: &Node) -> FrameResult<()> {
        for dof in Dof::ALL {
            self.fix_dof(node, dof)?;
        }
        Ok(())
    }

    /// Check whether a global DOF index is constrained
    pub fn is_constrained(&self, dof: usize) -> bool {
        self.constraints.contains_key(&dof)
    }

    /// Number of constrained DOFs
    pub fn num_constrained(&self) -> usize {
        self.constraints.len()
    }

    /// True when no constraints have been registered
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constrained global DOF indices in ascending order
    pub fn constrained_dofs(&self) -> Vec<usize> {
        self.constraints.keys().copied().collect()
    }

    /// Free global DOF indices in ascending order, for a system of `num_dofs`
    pub fn free_dofs(&self, num_dofs: usize) -> Vec<usize> {
        (0..num_dofs)
            .filter(|dof| !self.constraints.contains_key(dof))
            .collect()
    }

    /// Reduce an assembled system to its free DOFs
    ///
    /// Returns `(K_ff, f_f)` where `K_ff` is the principal submatrix of
    /// `k_global` on the free-DOF set (original relative order preserved) and
    /// `f_f` is the matching restriction of `f_global`, corrected by
    /// `-K_fc * u_c` for nonzero prescribed values. The inputs are not
    /// mutated; an empty constrainer returns them unchanged.
    pub fn constrain(&self, k_global: &Mat, f_global: &DVec) -> FrameResult<(Mat, DVec)> {
        let n = k_global.nrows();
        if k_global.ncols() != n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: k_global.ncols(),
            });
        }
        if f_global.len() != n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: f_global.len(),
            });
        }
        for &dof in self.constraints.keys() {
            if dof >= n {
                return Err(FrameError::DimensionMismatch {
                    expected: n,
                    found: dof,
                });
            }
        }

        let free = self.free_dofs(n);
        let n_free = free.len();

        let mut k_ff = Mat::zeros(n_free, n_free);
        let mut f_f = DVec::zeros(n_free);

        for (i, &di) in free.iter().enumerate() {
            f_f[i] = f_global[di];

            for (j, &dj) in free.iter().enumerate() {
                k_ff[(i, j)] = k_global[(di, dj)];
            }

            // Carry prescribed displacements over to the load side
            for (&dj, &value) in &self.constraints {
                if value != 0.0 {
                    f_f[i] -= k_global[(di, dj)] * value;
                }
            }
        }

        Ok((k_ff, f_f))
    }

    /// Scatter a reduced solution back into a full displacement vector
    ///
    /// Free DOFs take their solved values in order; constrained DOFs carry
    /// their prescribed values.
    pub fn expand(&self, u_free: &DVec, num_dofs: usize) -> FrameResult<DVec> {
        if u_free.len() + self.constraints.len() != num_dofs {
            return Err(FrameError::DimensionMismatch {
                expected: num_dofs,
                found: u_free.len() + self.constraints.len(),
            });
        }

        let mut u_full = DVec::zeros(num_dofs);
        for (i, &dof) in self.free_dofs(num_dofs).iter().enumerate() {
            u_full[dof] = u_free[i];
        }
        for (&dof, &value) in &self.constraints {
            u_full[dof] = value;
        }

        Ok(u_full)
    }

    /// Recover support reactions at the constrained DOFs
    ///
    /// Given the full displacement vector, the reaction at a constrained DOF
    /// is the unbalanced force `K_c * u - f_c`. Returns a full-length vector
    /// that is zero at free DOFs.
    pub fn support_reactions(
        &self,
        k_global: &Mat,
        u_full: &DVec,
        f_global: &DVec,
    ) -> FrameResult<DVec> {
        let n = k_global.nrows();
        if u_full.len() != n || f_global.len() != n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: u_full.len().max(f_global.len()),
            });
        }
        for &dof in self.constraints.keys() {
            if dof >= n {
                return Err(FrameError::DimensionMismatch {
                    expected: n,
                    found: dof,
                });
            }
        }

        let mut reactions = DVec::zeros(n);
        for &dof in self.constraints.keys() {
            let mut force = 0.0;
            for j in 0..n {
                force += k_global[(dof, j)] * u_full[j];
            }
            reactions[dof] = force - f_global[dof];
        }

        Ok(reactions)
    }
}
