//! CLI entry point.
//!
//! # Responsibility
//! - Validate the extension rooted at the current working directory.
//! - Map the pass/fail signal to the process exit code.

use extcheck_core::{init_logging, StructureValidator};
use log::error;
use std::io;
use std::process::ExitCode;

// Report owns stdout; keep stderr diagnostics to warnings and above.
const CLI_LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    if let Err(err) = init_logging(CLI_LOG_LEVEL) {
        eprintln!("extcheck: {err}");
        return ExitCode::FAILURE;
    }

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            error!("event=cli_start module=cli status=error error_code=cwd_unavailable error={err}");
            eprintln!("extcheck: cannot resolve current directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    match StructureValidator::new(root).validate(&mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("event=report_write module=cli status=error error={err}");
            eprintln!("extcheck: failed to write report: {err}");
            ExitCode::FAILURE
        }
    }
}
