//! Execute tests for preview command.

#[cfg(test)]
mod tests {
    use super::super::PreviewCmd;
    use crate::commands::{DriveArgs, Execute};
    use crate::config::LoadedConfig;
    use crate::test_utils;
    use rstest::{fixture, rstest};
    use std::fs;

    #[fixture]
    fn dual_disc_config() -> LoadedConfig {
        test_utils::dual_disc_config()
    }

    #[rstest]
    fn test_preview_writes_svg(dual_disc_config: LoadedConfig) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fit.svg");
        let result = PreviewCmd {
            out: Some(path.clone()),
            drive: DriveArgs::default(),
        }
        .execute(&dual_disc_config)
        .unwrap();

        assert!(result.dual_disc);
        let svg = fs::read_to_string(&path).unwrap();
        assert_eq!(svg.len(), result.bytes);
        assert!(svg.contains(r#"<polyline id="disc2""#));
    }

    crate::execute_error_test! {
        test_name: test_preview_rejects_invalid_eps,
        fixture: dual_disc_config,
        cmd: PreviewCmd {
            out: None,
            drive: DriveArgs {
                eps: Some(0.0),
                ..DriveArgs::default()
            },
        },
        contains: "eps must be within",
    }
}
