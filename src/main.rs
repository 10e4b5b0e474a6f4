use std::process::ExitCode;

fn main() -> ExitCode {
    // The handler has already printed the diagnostic and troubleshooting hints.
    match storeinject_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
