//! Verification harness for generated pin plates.
//!
//! The oracles are pure functions over a finished mesh that return
//! verdicts instead of panicking, so a scenario can collect every failure
//! in one pass before reporting.

pub mod oracle;

pub use oracle::{
    assert_all_passed, check_extents, check_positive_orientation, check_single_component,
    check_volume, check_watertight, run_all_solid_checks, OracleVerdict,
};
