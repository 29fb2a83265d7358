//! CLI parsing tests for equations command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_drive_args_tests! {
        command: "equations",
        variant: Equations,
    }

    crate::cli_option_test! {
        command: "equations",
        variant: Equations,
        test_name: test_equations_with_out,
        args: ["--out", "eq.txt"],
        field: out,
        expected: Some(PathBuf::from("eq.txt")),
    }
}
