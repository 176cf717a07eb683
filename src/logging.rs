// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "APPSHOTS_LOG";

/// Filter used when neither the CLI nor the environment provides one.
pub const DEFAULT_FILTER: &str = "appshots=info";

/// Builds the filter from the CLI level, then `APPSHOTS_LOG`, then the default.
pub fn build_filter(cli_level: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Call once near the start of `main`;
/// later calls are no-ops.
pub fn init(cli_level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(cli_level))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins() {
        let filter = build_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn invalid_cli_level_falls_back() {
        let filter = build_filter(Some("appshots=notalevel"));
        assert_ne!(filter.to_string(), "appshots=notalevel");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("warn"));
    }
}
