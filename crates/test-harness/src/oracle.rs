//! Solid-model oracles: pass/fail verdicts with diagnostic detail.

use mesh_kernel::TriMesh;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::pass(name, detail)
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::fail(name, detail)
        }
    }
}

/// Every directed edge must pair with its reverse exactly once.
pub fn check_watertight(mesh: &TriMesh) -> OracleVerdict {
    let unpaired = mesh.unpaired_edge_count();
    if unpaired == 0 && !mesh.is_empty() {
        OracleVerdict::pass(
            "watertight",
            format!("{} triangles, all edges paired", mesh.triangle_count()),
        )
    } else {
        OracleVerdict::fail_val(
            "watertight",
            format!("{unpaired} unpaired directed edges"),
            unpaired as f64,
        )
    }
}

/// The part must be one connected solid.
pub fn check_single_component(mesh: &TriMesh) -> OracleVerdict {
    let components = mesh.connected_components();
    if components == 1 {
        OracleVerdict::pass("single_component", "one connected solid".to_string())
    } else {
        OracleVerdict::fail_val(
            "single_component",
            format!("{components} connected components"),
            components as f64,
        )
    }
}

/// Outward triangle winding gives a positive signed volume.
pub fn check_positive_orientation(mesh: &TriMesh) -> OracleVerdict {
    let v = mesh.signed_volume();
    if v > 0.0 {
        OracleVerdict::pass_val("orientation", format!("signed volume {v:.4} mm^3"), v)
    } else {
        OracleVerdict::fail_val(
            "orientation",
            format!("signed volume {v:.4} mm^3 is not positive"),
            v,
        )
    }
}

/// Mesh volume must match an expected value within `tolerance`.
pub fn check_volume(mesh: &TriMesh, expected: f64, tolerance: f64) -> OracleVerdict {
    let v = mesh.signed_volume();
    let delta = (v - expected).abs();
    if delta <= tolerance {
        OracleVerdict::pass_val(
            "volume",
            format!("{v:.6} mm^3 within {tolerance} of {expected:.6}"),
            v,
        )
    } else {
        OracleVerdict::fail_val(
            "volume",
            format!("{v:.6} mm^3, expected {expected:.6} (delta {delta:.2e})"),
            v,
        )
    }
}

/// Bounding-box extents must match `(x, y, z)` within `tolerance`.
pub fn check_extents(mesh: &TriMesh, expected: [f64; 3], tolerance: f64) -> OracleVerdict {
    let Some(ext) = mesh.extents() else {
        return OracleVerdict::fail("extents", "empty mesh".to_string());
    };
    let actual = [ext.x, ext.y, ext.z];
    for (axis, (a, e)) in ["x", "y", "z"].iter().zip(actual.iter().zip(expected)) {
        if (a - e).abs() > tolerance {
            return OracleVerdict::fail_val(
                "extents",
                format!("{axis} extent {a:.4} mm, expected {e:.4}"),
                *a,
            );
        }
    }
    OracleVerdict::pass(
        "extents",
        format!("{:.2} x {:.2} x {:.2} mm", actual[0], actual[1], actual[2]),
    )
}

/// Run the structural checks every finished part must satisfy.
pub fn run_all_solid_checks(mesh: &TriMesh) -> Vec<OracleVerdict> {
    vec![
        check_watertight(mesh),
        check_single_component(mesh),
        check_positive_orientation(mesh),
    ]
}

/// Panic with every failing verdict listed, for use at the end of a
/// scenario.
pub fn assert_all_passed(verdicts: &[OracleVerdict]) {
    let failures: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("{}: {}", v.oracle_name, v.detail))
        .collect();
    assert!(failures.is_empty(), "oracle failures:\n{}", failures.join("\n"));
}
