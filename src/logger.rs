pub fn init_logger(verbose: bool, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else if quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        })
        .init();
}
