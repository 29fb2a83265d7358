//! Execute tests for layout command.

#[cfg(test)]
mod tests {
    use super::super::LayoutCmd;
    use crate::commands::DriveArgs;
    use crate::config::LoadedConfig;
    use crate::test_utils;
    use rstest::{fixture, rstest};

    #[fixture]
    fn default_config() -> LoadedConfig {
        test_utils::default_config()
    }

    crate::execute_test! {
        test_name: test_layout_defaults,
        fixture: default_config,
        cmd: LayoutCmd { drive: DriveArgs::default() },
        assertions: |result| {
            assert_eq!(result.rollers.centres.len(), 10);
            assert_eq!(result.rollers.radius, 3.0);
            assert_eq!(result.output_holes.centres.len(), 4);
            assert!((result.output_holes.radius - 4.1).abs() < 1e-12);
            assert!((result.output_holes.centres[1].y - 10.0).abs() < 1e-9);
        },
    }

    crate::execute_test! {
        test_name: test_layout_custom_output_pins,
        fixture: default_config,
        cmd: LayoutCmd {
            drive: DriveArgs {
                out_pin_count: Some(6),
                out_pin_circle_radius: Some(12.0),
                hole_clearance: Some(0.0),
                ..DriveArgs::default()
            },
        },
        assertions: |result| {
            assert_eq!(result.output_holes.centres.len(), 6);
            assert_eq!(result.output_holes.pitch_radius, 12.0);
            assert_eq!(result.output_holes.radius, 4.0);
            for c in &result.output_holes.centres {
                assert!((c.norm() - 12.0).abs() < 1e-9);
            }
        },
    }

    crate::execute_error_test! {
        test_name: test_layout_invalid_pin_diameter,
        fixture: default_config,
        cmd: LayoutCmd {
            drive: DriveArgs {
                out_pin_diameter: Some(0.0),
                ..DriveArgs::default()
            },
        },
        contains: "output_pin_diameter must be > 0",
    }
}
