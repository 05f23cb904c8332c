use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter expression, e.g. `KICKS_LOG=kicks=debug`.
pub const LOG_ENV: &str = "KICKS_LOG";

/// Install the stderr subscriber. `KICKS_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "kicks=debug" } else { "warn" };

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(fallback),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
