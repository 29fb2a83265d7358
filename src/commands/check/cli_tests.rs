//! CLI parsing tests for check command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_drive_args_tests! {
        command: "check",
        variant: Check,
    }

    crate::cli_option_test! {
        command: "check",
        variant: Check,
        test_name: test_check_with_single_disc,
        args: ["--single-disc"],
        field: drive.single_disc,
        expected: true,
    }

    crate::cli_error_test! {
        command: "check",
        test_name: test_check_rejects_non_numeric_radius,
        args: ["-R", "wide"],
    }
}
