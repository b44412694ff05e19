/// Configures `env_logger` for the process.
///
/// Progress lines go to stdout independently of the logger, so the quiet
/// default only lets warnings and errors through.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
