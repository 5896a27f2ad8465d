use std::process::ExitCode;

fn main() -> ExitCode {
    match discovery_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            discovery_cli::print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
