use draft_url_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a failure only costs diagnostics.
    if let Err(err) = logging::init_logging() {
        eprintln!("draft-url warning: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("draft-url error: {:#}", err);
        std::process::exit(1);
    }
}
