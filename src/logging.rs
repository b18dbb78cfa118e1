//! Developer tracing for the launcher.
//!
//! The localized diagnostics in `launch` are always printed; tracing only adds
//! step-by-step detail (candidates tried, child status) when asked for.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Launcher-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "BOT_LAUNCHER_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the filter directive: `BOT_LAUNCHER_LOG`, then `RUST_LOG`, then `warn`.
///
/// `RUST_LOG` is often set globally for other tools, so the launcher's own
/// variable wins. Empty values count as unset.
fn directive(launcher_log: Option<String>, rust_log: Option<String>) -> String {
    [launcher_log, rust_log]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install the stderr subscriber. Stdout is left to the bot script.
///
/// ```bash
/// BOT_LAUNCHER_LOG=bot_launcher=debug ./bot-launcher
/// ```
pub fn init() {
    let directive = directive(std::env::var(LOG_ENV).ok(), std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
