use tracing_subscriber::EnvFilter;

/// Pick the filter directive for a `-v` count, or `fallback` when no `-v`
/// flag was given.
pub fn verbosity_directive(verbose: u8, fallback: &str) -> String {
    match verbose {
        0 => fallback.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over everything; otherwise the directive comes from
/// [`verbosity_directive`]. An unparsable directive falls back to `warn`.
/// Calling this twice is harmless: the second call is ignored.
pub fn init(verbose: u8, settings_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = verbosity_directive(verbose, settings_filter);
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
