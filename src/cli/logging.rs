use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level for the `--quiet`/`--verbose` flags
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the logger; only the first call in a process has any effect
pub fn init_logging(level: LevelFilter) {
    let result = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
