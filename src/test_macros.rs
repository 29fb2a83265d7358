//! Declarative macros for generating CLI parsing, execute and output tests.
//!
//! Instead of writing repetitive test functions, you can declare the test
//! cases and let the macro generate the actual test code.

// =============================================================================
// CLI Test Macros
// =============================================================================

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($($def_field:ident).+ : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["cycloid", $cmd, $($req_arg),*]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    $(
                        assert_eq!(cmd.$($def_field).+, $def_expected,
                            concat!("Default value mismatch for field: ", stringify!($($def_field).+)));
                    )*
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a single CLI option test.
///
/// `field` may be a path into a flattened struct, e.g. `drive.rollers`.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $($field:ident).+,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "cycloid",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$($field).+, $expected,
                        concat!("Field ", stringify!($($field).+), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: "profile",
///     test_name: test_disc_three_rejected,
///     args: ["--disc", "3"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "cycloid",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

/// Generate the shared drive-flag tests every geometry command must pass.
#[macro_export]
macro_rules! cli_drive_args_tests {
    (
        command: $cmd:literal,
        variant: $variant:ident $(,)?
    ) => {
        #[rstest]
        fn test_drive_flags_parse() {
            let args = Args::try_parse_from([
                "cycloid", $cmd, "-n", "12", "-R", "30", "-r", "2.5", "-e", "1.2",
                "--out-pin-circle-radius", "15", "--out-pin-count", "6",
                "--out-pin-diameter", "5", "--hole-clearance", "0.3",
                "--dual-disc", "--disc2-phase", "90", "--samples", "600", "--eps", "0.001",
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    let d = &cmd.drive;
                    assert_eq!(d.rollers, Some(12));
                    assert_eq!(d.pitch_radius, Some(30.0));
                    assert_eq!(d.roller_radius, Some(2.5));
                    assert_eq!(d.eccentricity, Some(1.2));
                    assert_eq!(d.out_pin_circle_radius, Some(15.0));
                    assert_eq!(d.out_pin_count, Some(6));
                    assert_eq!(d.out_pin_diameter, Some(5.0));
                    assert_eq!(d.hole_clearance, Some(0.3));
                    assert!(d.dual_disc);
                    assert_eq!(d.disc2_phase, Some(90.0));
                    assert_eq!(d.samples, Some(600));
                    assert_eq!(d.eps, Some(0.001));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }

        #[rstest]
        fn test_drive_flags_default_unset() {
            let args = Args::try_parse_from(["cycloid", $cmd]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert!(cmd.drive.rollers.is_none());
                    assert!(cmd.drive.eccentricity.is_none());
                    assert!(!cmd.drive.dual_disc);
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }

        #[rstest]
        fn test_too_few_rollers_rejected() {
            assert!(Args::try_parse_from(["cycloid", $cmd, "-n", "2"]).is_err());
        }

        #[rstest]
        fn test_too_many_rollers_rejected() {
            assert!(Args::try_parse_from(["cycloid", $cmd, "-n", "501"]).is_err());
            assert!(Args::try_parse_from(["cycloid", $cmd, "--out-pin-count", "501"]).is_err());
        }

        #[rstest]
        fn test_samples_out_of_range_rejected() {
            assert!(Args::try_parse_from(["cycloid", $cmd, "--samples", "100"]).is_err());
            assert!(Args::try_parse_from(["cycloid", $cmd, "--samples", "6001"]).is_err());
        }

        #[rstest]
        fn test_dual_and_single_disc_conflict() {
            assert!(Args::try_parse_from(["cycloid", $cmd, "--dual-disc", "--single-disc"]).is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a test that executes a command against a config fixture and
/// runs assertions on the result.
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $assertions:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::config::LoadedConfig) {
            use crate::commands::Execute;
            let $result = $cmd.execute(&$fixture).expect("Execute should succeed");
            $assertions
        }
    };
}

/// Generate a test that verifies command execution fails, optionally
/// checking the error message.
#[macro_export]
macro_rules! execute_error_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        contains: $needle:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::config::LoadedConfig) {
            use crate::commands::Execute;
            let result = $cmd.execute(&$fixture);
            match result {
                Ok(_) => panic!("Execute should fail"),
                Err(err) => assert!(
                    err.to_string().contains($needle),
                    "Error '{}' should contain '{}'", err, $needle
                ),
            }
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table_single,
///     fixture: single_result,
///     fixture_type: CheckResult,
///     expected: SINGLE_TABLE,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies table output contains expected strings.
///
/// Use this when exact string matching is too brittle.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let output = $fixture.to_table();
            $(
                assert!(output.contains($needle), concat!("Table output should contain: ", $needle));
            )*
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: single_result,
///     fixture_type: CheckResult,
///     assertions: {
///         "lobes": 9,
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
