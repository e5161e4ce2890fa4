use pimate_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG` wins, then `--log-level`, then the
/// configured level for the pimate crates.
pub fn directive(env: Option<String>, cli: Option<&str>, level: LogLevel) -> String {
    env.filter(|d| !d.trim().is_empty())
        .or_else(|| cli.map(str::to_string))
        .unwrap_or_else(|| default_directive(level))
}

fn default_directive(level: LogLevel) -> String {
    format!("pimate={}", level.as_str())
}

/// Install the global fmt subscriber. Logs go to stderr so command output
/// on stdout stays clean.
pub fn init(cli: Option<&str>, level: LogLevel) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = directive(env, cli, level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("pimate: ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(default_directive(level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
