use folio_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stdout is the HTTP response; logs go to the state file or stderr.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::debug!("file logging unavailable: {err:#}");
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("folio error: {:#}", err);
        std::process::exit(1);
    }
}
