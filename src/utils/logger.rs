use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "secret_santa";

/// Filter used when `RUST_LOG` is unset. Other crates (rustls, lettre,
/// tokio) stay at `warn`.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={},warn", CRATE_TARGET, level)
}

/// Diagnostics go to stderr; stdout is reserved for the progress lines.
/// A subscriber installed earlier (e.g. by a test harness) is kept.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
