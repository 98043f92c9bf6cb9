use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{hooks, init_tracing};

/// Validate the hooks section of a Claude Code settings file
#[derive(Parser)]
#[command(name = "validate-hooks", version, about, long_about = None)]
pub struct ValidateHooksCli {
    /// Settings file to validate
    file: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

impl ValidateHooksCli {
    pub fn run(self) -> ExitCode {
        init_tracing(if self.verbose { "debug" } else { "warn" }, "pretty");

        let Some(file) = self.file else {
            let _ = write_usage(&mut std::io::stderr().lock());
            return ExitCode::FAILURE;
        };

        match hooks::cmd_validate(&file, self.json) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("❌ Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

fn write_usage(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "Usage: validate-hooks <settings-file>")?;
    writeln!(err, "Example: validate-hooks ~/.claude/settings.json")
}
