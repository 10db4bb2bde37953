//! End-to-end tests on a closed rectangular frame under lateral load
//!
//! A 1 m x 1 m single-bay, single-story frame loaded horizontally at a top
//! corner. With near-rigid axial behaviour its sway matches the closed-form
//! shear-beam model with k = 24 / (h * (h/EI_col + b/EI_girder)).

use approx::assert_relative_eq;
use frame_solver::prelude::*;

const H: f64 = 100.0;
const EI_GIRDER: f64 = 10000.0;
const EI_COLUMN: f64 = 1000.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build the frame with the given axial stiffness on all members.
///
/// Returns the model, the support constraints, and the loaded top corner.
fn build_portal_frame(ea: f64) -> (Model, Constrainer, NodeId) {
    let mut model = Model::new();

    let n0 = model.add_node(0.0, 0.0);
    let n1 = model.add_node(1.0, 0.0);
    let n2 = model.add_node(1.0, 1.0);
    let n3 = model.add_node(0.0, 1.0);

    let girder = Section::new(EI_GIRDER, ea);
    let column = Section::new(EI_COLUMN, ea);

    // Closed loop: girders horizontal, columns vertical
    for (a, b, section) in [
        (n0, n1, girder),
        (n1, n2, column),
        (n2, n3, girder),
        (n3, n0, column),
    ] {
        let element = model.add_element(a, b).unwrap();
        model.set_section(element, section).unwrap();
    }

    model.add_node_load(n3, NodeLoad::fx(H)).unwrap();

    let mut constrainer = Constrainer::new();
    constrainer
        .fix_dof(model.node(n0).unwrap(), Dof::TranslationX)
        .unwrap();
    constrainer
        .fix_dof(model.node(n0).unwrap(), Dof::TranslationZ)
        .unwrap();
    constrainer
        .fix_dof(model.node(n1).unwrap(), Dof::TranslationZ)
        .unwrap();

    (model, constrainer, n3)
}

fn shear_beam_sway() -> f64 {
    let (h, b) = (1.0, 1.0);
    let k = 24.0 / (h * (h / EI_COLUMN + b / EI_GIRDER));
    H * h / k
}

#[test]
fn portal_frame_matches_reference_displacement() {
    init_logging();
    let (model, constrainer, loaded) = build_portal_frame(1.0e10);

    let solution = model.solve(&constrainer).unwrap();
    let top = solution
        .node_displacement(model.node(loaded).unwrap())
        .unwrap();

    // 9-DOF reduced system (12 total minus 3 supports)
    assert_relative_eq!(top.ux, 4.58334333e-3, epsilon = 1e-10);
}

#[test]
fn portal_frame_reactions_balance_applied_load() {
    init_logging();
    let (model, constrainer, _) = build_portal_frame(1.0e10);

    let solution = model.solve(&constrainer).unwrap();

    let nodes: Vec<&Node> = model.nodes().collect();
    let r0 = solution.node_reaction(nodes[0]).unwrap();
    let r1 = solution.node_reaction(nodes[1]).unwrap();

    assert_relative_eq!(r0.fx, -H, epsilon = 1e-6);
    assert_relative_eq!(r0.fz, -H, epsilon = 1e-6);
    assert_relative_eq!(r1.fz, H, epsilon = 1e-6);

    // Free DOFs carry no reaction
    let r3 = solution.node_reaction(nodes[3]).unwrap();
    assert_relative_eq!(r3.fx, 0.0);
    assert_relative_eq!(r3.fz, 0.0);
}

#[test]
fn portal_frame_global_matrix_is_symmetric() {
    let (model, _, _) = build_portal_frame(1.0e10);

    let (k, _) = model.assemble().unwrap();
    assert_eq!(k.nrows(), 12);
    for i in 0..12 {
        for j in 0..12 {
            assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-4);
        }
    }
}

#[test]
fn sway_converges_to_shear_beam_as_axial_stiffness_grows() {
    init_logging();
    let reference = shear_beam_sway();

    let mut previous_error = f64::INFINITY;
    for exponent in 5..=12 {
        let ea = 10.0_f64.powi(exponent);
        let (model, constrainer, loaded) = build_portal_frame(ea);

        let solution = model.solve(&constrainer).unwrap();
        let sway = solution
            .node_displacement(model.node(loaded).unwrap())
            .unwrap()
            .ux;

        let error = (sway - reference).abs();
        assert!(
            error < previous_error,
            "error {error:.3e} at EA = 1e{exponent} did not shrink (previous {previous_error:.3e})"
        );
        previous_error = error;
    }

    // Axially rigid members reproduce the shear-beam model
    assert!(previous_error < 1e-9);
}

#[test]
fn soft_axial_members_diverge_from_shear_beam() {
    let reference = shear_beam_sway();
    let (model, constrainer, loaded) = build_portal_frame(1.0e4);

    let solution = model.solve(&constrainer).unwrap();
    let sway = solution
        .node_displacement(model.node(loaded).unwrap())
        .unwrap()
        .ux;

    // Axial deformation dominates and the two models no longer agree
    assert!((sway - reference).abs() / reference > 0.5);
}

#[test]
fn independent_models_do_not_share_numbering() {
    let (first, _, _) = build_portal_frame(1.0e10);

    let mut second = Model::new();
    let n = second.add_node(10.0, 10.0);

    assert_eq!(first.num_dofs(), 12);
    assert_eq!(second.node(n).unwrap().dofs(), [0, 1, 2]);
}
