use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps the repeat count of `-v` to a maximum log level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Builds the log filter from `directives`, falling back to the `-v` level.
///
/// Malformed directives are skipped rather than rejected.
pub fn filter_for(verbosity: u8, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .parse_lossy(directives)
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so that stdout only ever carries the statement. The
/// `RUST_LOG` environment variable overrides the level picked by `-v`. A
/// subscriber that is already installed is left in place.
///
/// ## Arguments
/// * `verbosity` - How many times `-v` was passed.
pub fn initialize(verbosity: u8) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter_for(verbosity, &directives))
        .with_target(false)
        .without_time()
        .try_init();
}
