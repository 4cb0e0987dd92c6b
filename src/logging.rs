use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Logs go to stderr so git shows them
/// alongside the hook's status line.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `debug` when
/// `verbose` is set and `warn` when it is not.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jirax={level}")));

    // A second init (e.g. from a test) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
