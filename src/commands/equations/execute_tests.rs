//! Execute tests for equations command.

#[cfg(test)]
mod tests {
    use super::super::EquationsCmd;
    use crate::commands::DriveArgs;
    use crate::config::LoadedConfig;
    use crate::test_utils;
    use rstest::{fixture, rstest};

    #[fixture]
    fn default_config() -> LoadedConfig {
        test_utils::default_config()
    }

    #[fixture]
    fn dual_disc_config() -> LoadedConfig {
        test_utils::dual_disc_config()
    }

    crate::execute_test! {
        test_name: test_equations_defaults,
        fixture: default_config,
        cmd: EquationsCmd { out: None, drive: DriveArgs::default() },
        assertions: |result| {
            assert_eq!(result.equations.rollers, 10);
            assert!(result.equations.x_equation.contains("(E*cos(10*t))"));
            assert!(result.equations.disc2_phase_rad.is_none());
            assert!(result.written_to.is_none());
        },
    }

    crate::execute_test! {
        test_name: test_equations_dual_disc,
        fixture: dual_disc_config,
        cmd: EquationsCmd { out: None, drive: DriveArgs::default() },
        assertions: |result| {
            let phase = result.equations.disc2_phase_rad.unwrap();
            assert!((phase - std::f64::consts::PI).abs() < 1e-12);
        },
    }

    crate::execute_test! {
        test_name: test_equations_follow_roller_count,
        fixture: default_config,
        cmd: EquationsCmd {
            out: None,
            drive: DriveArgs {
                rollers: Some(14),
                ..DriveArgs::default()
            },
        },
        assertions: |result| {
            assert!(result.equations.psi.contains("sin((1-14)*t)"));
            assert!(result.equations.y_equation.ends_with("(E*sin(14*t))"));
        },
    }

    #[rstest]
    fn test_equations_written_to_file(default_config: LoadedConfig) {
        use crate::commands::Execute;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eq.txt");
        let result = EquationsCmd {
            out: Some(path.clone()),
            drive: DriveArgs::default(),
        }
        .execute(&default_config)
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, result.equations.to_text());
        assert_eq!(result.written_to, Some(path.display().to_string()));
    }
}
