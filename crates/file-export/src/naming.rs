use part_types::ParameterSet;

/// Derived output name: `{cylinder}mmCircle-{plate}mm.stl`, with both
/// diameters truncated to whole millimetres.
pub fn default_filename(params: &ParameterSet) -> String {
    format!(
        "{}mmCircle-{}mm.stl",
        params.cylinder_diameter as i64, params.plate_diameter as i64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_name_the_classic_file() {
        assert_eq!(default_filename(&ParameterSet::default()), "4mmCircle-11mm.stl");
    }

    #[test]
    fn fractional_diameters_truncate() {
        let params = ParameterSet {
            plate_diameter: 20.5,
            cylinder_diameter: 8.9,
            ..ParameterSet::default()
        };
        assert_eq!(default_filename(&params), "8mmCircle-20mm.stl");
    }
}
