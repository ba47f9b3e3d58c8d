//! End-to-end pipeline tests over the public `build` entry point.

use approx::assert_relative_eq;
use part_builder::{build, BuildError, BuildOptions};
use part_types::{ParameterSet, ValidationError};
use proptest::prelude::*;

fn opts() -> BuildOptions {
    BuildOptions::default()
}

#[test]
fn default_parameters_build_a_watertight_pin() {
    let assembly = build(&ParameterSet::default(), &opts()).unwrap();
    assert!(assembly.mesh.is_watertight());
    assert_eq!(assembly.mesh.connected_components(), 1);
    assert_eq!(assembly.dims.label_text, "11");
    // The flagship invocation is clean: the hole through the label is the
    // designed interaction, not a warning.
    assert!(assembly.warnings.is_empty());
    assert!(assembly.label_trimmed);

    let (min, max) = assembly.mesh.bounding_box().unwrap();
    assert_relative_eq!(max.x - min.x, 11.0, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 11.0, epsilon = 1e-9);
    assert_relative_eq!(max.z - min.z, 11.8, epsilon = 1e-9);
}

#[test]
fn invalid_parameters_fail_before_any_geometry() {
    let err = build(
        &ParameterSet {
            plate_diameter: 4.0,
            cylinder_diameter: 4.0,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Validation(ValidationError::CylinderExceedsPlate { .. })
    ));
}

#[test]
fn oversized_plate_fails_the_fit_check() {
    let err = build(
        &ParameterSet {
            plate_diameter: 260.0,
            cylinder_diameter: 20.0,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Fit(_)));
}

#[test]
fn segment_count_changes_tessellation_not_topology() {
    let coarse = build(&ParameterSet::default(), &BuildOptions { segments: 16 }).unwrap();
    let fine = build(&ParameterSet::default(), &BuildOptions { segments: 128 }).unwrap();
    assert!(coarse.mesh.is_watertight());
    assert!(fine.mesh.is_watertight());
    assert!(fine.mesh.triangle_count() > coarse.mesh.triangle_count());
    // Finer sampling converges toward the true round volume from below.
    assert!(fine.mesh.volume() > coarse.mesh.volume());
}

#[test]
fn building_twice_is_deterministic() {
    let a = build(&ParameterSet::default(), &opts()).unwrap();
    let b = build(&ParameterSet::default(), &opts()).unwrap();
    assert_eq!(a.mesh.triangles, b.mesh.triangles);
    assert_eq!(a.mesh.vertex_count(), b.mesh.vertex_count());
}

prop_compose! {
    /// Parameter sets that satisfy every validation invariant and fit the
    /// build volume.
    fn valid_params()(
        plate in 3.0f64..120.0,
        cylinder_frac in 0.15f64..0.9,
        height in 1.0f64..40.0,
        thickness in 0.4f64..5.0,
        hole_frac in 0.0f64..0.9,
    ) -> ParameterSet {
        let cylinder = plate * cylinder_frac;
        ParameterSet {
            plate_diameter: plate,
            cylinder_diameter: cylinder,
            cylinder_height: height,
            plate_thickness: thickness,
            hole_diameter: cylinder * hole_frac,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_valid_part_is_a_closed_single_solid(params in valid_params()) {
        let assembly = build(&params, &BuildOptions { segments: 32 }).unwrap();
        prop_assert!(assembly.mesh.is_watertight());
        prop_assert_eq!(assembly.mesh.connected_components(), 1);
        prop_assert!(assembly.mesh.signed_volume() > 0.0);
    }

    #[test]
    fn extents_match_the_requested_diameters(params in valid_params()) {
        let assembly = build(&params, &BuildOptions { segments: 32 }).unwrap();
        let (min, max) = assembly.mesh.bounding_box().unwrap();
        prop_assert!((max.x - min.x - params.plate_diameter).abs() < 1e-9);
        prop_assert!(min.z.abs() < 1e-12);
        // Top is the label emboss when present, the bare face otherwise.
        let top = max.z;
        let face = params.plate_thickness + params.cylinder_height;
        prop_assert!(top >= face - 1e-9);
        prop_assert!(top <= face + 0.8 + 1e-9);
    }
}
