use std::process::ExitCode;

fn main() -> ExitCode {
    match novae_cli::run_cli() {
        Ok(code) => code,
        Err(e) => {
            novae_logger::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
