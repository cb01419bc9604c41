//! Logger initialisation for the command-line tool

use log::LevelFilter;

/// Initialize logging to stderr
///
/// Uses `Debug` level when `verbose` is set, `Info` otherwise. `RUST_LOG`
/// overrides both when present.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialisation (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
