//! CLI parsing tests for profile command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_drive_args_tests! {
        command: "profile",
        variant: Profile,
    }

    crate::cli_defaults_test! {
        command: "profile",
        variant: Profile,
        required_args: [],
        defaults: {
            disc: 1,
            csv: None,
            points: false,
        },
    }

    crate::cli_option_test! {
        command: "profile",
        variant: Profile,
        test_name: test_profile_with_csv,
        args: ["--csv", "disc1.csv"],
        field: csv,
        expected: Some(PathBuf::from("disc1.csv")),
    }

    crate::cli_option_test! {
        command: "profile",
        variant: Profile,
        test_name: test_profile_with_disc_two,
        args: ["--disc", "2", "--dual-disc"],
        field: disc,
        expected: 2,
    }

    crate::cli_error_test! {
        command: "profile",
        test_name: test_profile_disc_three_rejected,
        args: ["--disc", "3"],
    }

    crate::cli_error_test! {
        command: "profile",
        test_name: test_profile_disc_zero_rejected,
        args: ["--disc", "0"],
    }
}
