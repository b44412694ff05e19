//! templatizr's application entry point.
//! Parses the command line, configures logging and hands over to the
//! processing pipeline.

use templatizr::{cli::get_args, error::default_error_handler, logger::init_logger, processor::run};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}
