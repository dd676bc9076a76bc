mod handlers;
pub mod logger;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::AppError;

pub fn run() -> Result<(), AppError> {
    let cli = parse::Cli::parse();
    logger::init_logging(cli.log_level.as_deref());
    match cli.cmd {
        parse::Command::Resolve(a) => handlers::resolve_config(&a),
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
