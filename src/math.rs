//! Dense matrix utilities for the direct stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

use crate::error::{FrameError, FrameResult};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 6x6 matrix for element stiffness and transformation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for element forces/displacements
pub type Vec6 = SVector<f64, 6>;

/// Compute the local stiffness matrix for a 2D beam-column element
///
/// The element combines extension and Euler-Bernoulli bending. Local DOF
/// ordering is `[u1, w1, phi1, u2, w2, phi2]` with `u` along the element
/// axis, `w` transverse, and `phi` the cross-section rotation.
///
/// # Arguments
/// * `ea` - Axial stiffness (E·A)
/// * `ei` - Flexural stiffness (E·I)
/// * `length` - Element length
pub fn beam_local_stiffness(ea: f64, ei: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = ea / l;
    let ei_l3 = 12.0 * ei / l3;
    let ei_l2 = 6.0 * ei / l2;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at node 1
        ea_l,    0.0,     0.0,            -ea_l,   0.0,     0.0,
        // Row 1: transverse shear at node 1
        0.0,     ei_l3,   -ei_l2,         0.0,     -ei_l3,  -ei_l2,
        // Row 2: moment at node 1
        0.0,     -ei_l2,  4.0 * ei / l,   0.0,     ei_l2,   2.0 * ei / l,
        // Row 3: axial at node 2
        -ea_l,   0.0,     0.0,            ea_l,    0.0,     0.0,
        // Row 4: transverse shear at node 2
        0.0,     -ei_l3,  ei_l2,          0.0,     ei_l3,   ei_l2,
        // Row 5: moment at node 2
        0.0,     -ei_l2,  2.0 * ei / l,   0.0,     ei_l2,   4.0 * ei / l,
    ];

    Mat6::from_row_slice(&data)
}

/// Build the local-to-global transformation matrix for an element orientation
///
/// Block-diagonal with a 2x2 rotation block for each node's translational
/// pair and identity on the rotation DOFs. Global element stiffness follows
/// as `T' * k_local * T`.
pub fn beam_transformation(cos_a: f64, sin_a: f64) -> Mat6 {
    let c = cos_a;
    let s = sin_a;

    #[rustfmt::skip]
    let data = [
        c,    -s,   0.0,  0.0,  0.0,  0.0,
        s,    c,    0.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  1.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  0.0,  c,    -s,   0.0,
        0.0,  0.0,  0.0,  s,    c,    0.0,
        0.0,  0.0,  0.0,  0.0,  0.0,  1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Add a 6x6 element block into the global stiffness matrix
///
/// Entry `(i, j)` of the block accumulates into `k_global[dofs[i], dofs[j]]`.
/// Overlapping contributions at shared nodes add, never overwrite.
pub fn scatter_add(k_global: &mut Mat, dofs: &[usize; 6], block: &Mat6) -> FrameResult<()> {
    let n = k_global.nrows();
    if k_global.ncols() != n {
        return Err(FrameError::DimensionMismatch {
            expected: n,
            found: k_global.ncols(),
        });
    }
    for &dof in dofs {
        if dof >= n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: dof,
            });
        }
    }

    for (i, &di) in dofs.iter().enumerate() {
        for (j, &dj) in dofs.iter().enumerate() {
            k_global[(di, dj)] += block[(i, j)];
        }
    }

    Ok(())
}

/// Add a 3-component nodal load into the global force vector
pub fn scatter_add_load(f_global: &mut Vec, dofs: &[usize; 3], load: &[f64; 3]) -> FrameResult<()> {
    let n = f_global.len();
    for &dof in dofs {
        if dof >= n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: dof,
            });
        }
    }

    for (i, &dof) in dofs.iter().enumerate() {
        f_global[dof] += load[i];
    }

    Ok(())
}

/// Extract the 6 element DOF values from a global displacement vector
pub fn gather_element(u_global: &Vec, dofs: &[usize; 6]) -> FrameResult<Vec6> {
    let n = u_global.len();
    for &dof in dofs {
        if dof >= n {
            return Err(FrameError::DimensionMismatch {
                expected: n,
                found: dof,
            });
        }
    }

    Ok(Vec6::from_iterator(dofs.iter().map(|&dof| u_global[dof])))
}

/// Solve a dense linear system using LU decomposition
///
/// Returns `None` when the matrix is singular.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_local_stiffness_closed_form() {
        let (ea, ei, l) = (2.0e6, 1.5e4, 4.0);
        let k = beam_local_stiffness(ea, ei, l);

        assert_relative_eq!(k[(0, 0)], ea / l);
        assert_relative_eq!(k[(0, 3)], -ea / l);
        assert_relative_eq!(k[(1, 1)], 12.0 * ei / (l * l * l));
        assert_relative_eq!(k[(1, 4)], -12.0 * ei / (l * l * l));
        assert_relative_eq!(k[(1, 2)], -6.0 * ei / (l * l));
        assert_relative_eq!(k[(2, 4)], 6.0 * ei / (l * l));
        assert_relative_eq!(k[(2, 2)], 4.0 * ei / l);
        assert_relative_eq!(k[(2, 5)], 2.0 * ei / l);

        // Symmetry
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(k[(i, j)], k[(j, i)]);
            }
        }
    }

    #[test]
    fn test_transformation_is_orthogonal() {
        let angle: f64 = 0.7;
        let t = beam_transformation(angle.cos(), angle.sin());
        let identity = t.transpose() * t;

        for i in 0..6 {
            for j in 0..6 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        let k = beam_local_stiffness(1.0e8, 1.0e4, 3.0);
        let angle: f64 = 1.1;

        let t = beam_transformation(angle.cos(), angle.sin());
        let k_rotated = t.transpose() * k * t;

        let t_back = beam_transformation((-angle).cos(), (-angle).sin());
        let k_back = t_back.transpose() * k_rotated * t_back;

        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(k_back[(i, j)], k[(i, j)], epsilon = 1e-6, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_scatter_add_accumulates() {
        let mut k = Mat::zeros(9, 9);
        let block = Mat6::from_element(1.0);
        let dofs = [0, 1, 2, 6, 7, 8];

        scatter_add(&mut k, &dofs, &block).unwrap();
        scatter_add(&mut k, &dofs, &block).unwrap();

        assert_relative_eq!(k[(0, 0)], 2.0);
        assert_relative_eq!(k[(2, 6)], 2.0);
        assert_relative_eq!(k[(8, 8)], 2.0);
        // Untouched rows/columns stay zero
        assert_relative_eq!(k[(3, 3)], 0.0);
        assert_relative_eq!(k[(0, 4)], 0.0);
    }

    #[test]
    fn test_scatter_add_rejects_out_of_range_dof() {
        let mut k = Mat::zeros(6, 6);
        let block = Mat6::zeros();
        let result = scatter_add(&mut k, &[0, 1, 2, 3, 4, 6], &block);
        assert!(matches!(
            result,
            Err(FrameError::DimensionMismatch { expected: 6, found: 6 })
        ));
    }

    #[test]
    fn test_scatter_and_gather_load() {
        let mut f = Vec::zeros(6);
        scatter_add_load(&mut f, &[3, 4, 5], &[1.0, -2.0, 3.0]).unwrap();
        scatter_add_load(&mut f, &[3, 4, 5], &[1.0, 0.0, 0.0]).unwrap();

        assert_relative_eq!(f[3], 2.0);
        assert_relative_eq!(f[4], -2.0);
        assert_relative_eq!(f[5], 3.0);

        let gathered = gather_element(&f, &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_relative_eq!(gathered[3], 2.0);
        assert_relative_eq!(gathered[0], 0.0);
    }

    #[test]
    fn test_solve_linear_system() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = Vec::from_row_slice(&[5.0, 10.0]);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_detects_singular_matrix() {
        let a = Mat::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let b = Vec::from_row_slice(&[1.0, 2.0]);
        assert!(solve_linear_system(&a, &b).is_none());
    }
}
