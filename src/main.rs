use std::process::ExitCode;

fn main() -> ExitCode {
    match chart_domain::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
