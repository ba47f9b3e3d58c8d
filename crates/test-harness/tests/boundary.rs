//! Boundary and degenerate-parameter behaviour.

use approx::assert_relative_eq;
use part_builder::{build, BuildError, BuildOptions};
use part_types::{FitError, ParameterSet};
use test_harness::{assert_all_passed, run_all_solid_checks};

fn opts() -> BuildOptions {
    BuildOptions::default()
}

#[test]
fn zero_hole_diameter_builds_a_solid_pin() {
    let solid = build(
        &ParameterSet {
            hole_diameter: 0.0,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap();
    let holed = build(&ParameterSet::default(), &opts()).unwrap();
    assert_all_passed(&run_all_solid_checks(&solid.mesh));
    // Drilling strictly removes material.
    assert!(solid.mesh.volume() > holed.mesh.volume());
}

#[test]
fn thin_walled_tube_still_meshes_cleanly() {
    // 0.4 mm wall: hole just below the cylinder diameter.
    let assembly = build(
        &ParameterSet {
            plate_diameter: 12.0,
            cylinder_diameter: 5.0,
            hole_diameter: 4.2,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap();
    assert_all_passed(&run_all_solid_checks(&assembly.mesh));
}

#[test]
fn swallowed_label_warns_but_succeeds() {
    let assembly = build(
        &ParameterSet {
            plate_diameter: 12.0,
            cylinder_diameter: 5.0,
            hole_diameter: 4.6,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap();
    assert!(assembly.warnings.iter().any(|w| w.contains("omitted")));
    assert_all_passed(&run_all_solid_checks(&assembly.mesh));
    // No emboss: the part tops out at the bare pin face.
    let (_, max) = assembly.mesh.bounding_box().unwrap();
    assert_relative_eq!(max.z, 11.0, epsilon = 1e-12);
}

#[test]
fn default_height_fits_the_build_volume() {
    let assembly = build(&ParameterSet::default(), &opts()).unwrap();
    assert_relative_eq!(assembly.dims.total_height, 11.8);
}

#[test]
fn tall_pin_fails_fit_on_z() {
    let err = build(
        &ParameterSet {
            plate_diameter: 30.0,
            cylinder_diameter: 10.0,
            cylinder_height: 255.0,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Fit(FitError::BuildVolumeExceeded { axis: "z", .. })
    ));
}

#[test]
fn wide_plate_fails_fit_on_footprint() {
    let err = build(
        &ParameterSet {
            plate_diameter: 251.0,
            cylinder_diameter: 10.0,
            ..ParameterSet::default()
        },
        &opts(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BuildError::Fit(FitError::BuildVolumeExceeded { axis: "x", .. })
    ));
}

#[test]
fn identical_parameters_build_identical_parts() {
    let params = ParameterSet {
        plate_diameter: 20.0,
        cylinder_diameter: 8.0,
        hole_diameter: 3.0,
        ..ParameterSet::default()
    };
    let a = build(&params, &opts()).unwrap();
    let b = build(&params, &opts()).unwrap();
    assert_eq!(a.mesh.volume(), b.mesh.volume());
    assert_eq!(a.mesh.bounding_box(), b.mesh.bounding_box());
    assert_eq!(a.mesh.triangle_count(), b.mesh.triangle_count());
}
