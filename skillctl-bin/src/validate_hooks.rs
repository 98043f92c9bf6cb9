use clap::Parser;
use skillctl_cli::ValidateHooksCli;
use std::process::ExitCode;

fn main() -> ExitCode {
    ValidateHooksCli::parse().run()
}
