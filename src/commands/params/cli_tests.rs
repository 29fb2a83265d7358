//! CLI parsing tests for params command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_drive_args_tests! {
        command: "params",
        variant: Params,
    }

    crate::cli_option_test! {
        command: "params",
        variant: Params,
        test_name: test_params_with_out,
        args: ["--out", "params.txt"],
        field: out,
        expected: Some(PathBuf::from("params.txt")),
    }
}
