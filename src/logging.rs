//! Logging setup for the modbuild binary
//!
//! - `RUST_LOG` always wins
//! - otherwise the configured filter, else `warn`
//! - `-v`/`-vv` then raise modbuild's own level on top of that base
//!
//! Logs go to stderr so stdout stays parseable in `--json` mode.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive for a run
fn filter_directive(rust_log: Option<&str>, configured: Option<&str>, verbose: u8) -> String {
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directive.to_string();
    }

    let base = configured
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER);
    match verbose {
        0 => base.to_string(),
        1 => format!("{base},modbuild=debug"),
        _ => format!("{base},modbuild=trace"),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(configured: Option<&str>, verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), configured, verbose);
    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .try_init();
}
