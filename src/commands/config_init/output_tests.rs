//! Output formatting tests for config-init command.

#[cfg(test)]
mod tests {
    use super::super::execute::ConfigInitResult;
    use crate::geometry::DriveParams;
    use rstest::{fixture, rstest};

    #[fixture]
    fn result() -> ConfigInitResult {
        ConfigInitResult {
            path: "cycloid.json".to_string(),
            params: DriveParams::default(),
            warnings: vec![],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table,
        fixture: result,
        fixture_type: ConfigInitResult,
        expected: "Wrote: cycloid.json\nDrive: N=10 R=20.000 Rr=3.000 E=1.100",
    }
}
