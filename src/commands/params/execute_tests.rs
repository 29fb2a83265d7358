//! Execute tests for params command.

#[cfg(test)]
mod tests {
    use super::super::ParamsCmd;
    use crate::commands::DriveArgs;
    use crate::config::LoadedConfig;
    use crate::test_utils;
    use rstest::{fixture, rstest};

    #[fixture]
    fn dual_disc_config() -> LoadedConfig {
        test_utils::dual_disc_config()
    }

    crate::execute_test! {
        test_name: test_params_dual_disc_sheet,
        fixture: dual_disc_config,
        cmd: ParamsCmd { out: None, drive: DriveArgs::default() },
        assertions: |result| {
            assert_eq!(result.sheet.lobes, 9);
            assert_eq!(result.sheet.params.samples, 240);
            let text = result.sheet.to_text();
            assert!(text.contains("samples                  = 240"));
            assert!(text.contains("Dual disc:"));
        },
    }

    crate::execute_test! {
        test_name: test_params_warn_on_tight_pitch,
        fixture: dual_disc_config,
        cmd: ParamsCmd {
            out: None,
            drive: DriveArgs {
                pitch_radius: Some(2.0),
                eccentricity: Some(0.1),
                ..DriveArgs::default()
            },
        },
        assertions: |result| {
            assert_eq!(result.warnings.len(), 1);
            assert!(result.warnings[0].contains("larger than Rr"));
        },
    }

    crate::execute_error_test! {
        test_name: test_params_rejects_bad_phase,
        fixture: dual_disc_config,
        cmd: ParamsCmd {
            out: None,
            drive: DriveArgs {
                disc2_phase: Some(400.0),
                ..DriveArgs::default()
            },
        },
        contains: "disc2_phase_deg must be within 0..=360",
    }
}
