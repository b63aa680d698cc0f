//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from the
//! `BUNDLE_RESTORE_LOG` env var if set, otherwise from settings and CLI
//! verbosity flags.

use tracing_subscriber::EnvFilter;

/// Env var holding a filter directive that overrides everything else
pub const LOG_ENV_VAR: &str = "BUNDLE_RESTORE_LOG";

/// Combine the configured directive with `-v`/`-q` flags
pub fn filter_directive(configured: &str, verbosity: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbosity {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("warn", 0, false), "warn");
        assert_eq!(filter_directive("warn", 1, false), "debug");
        assert_eq!(filter_directive("warn", 3, false), "trace");
        assert_eq!(filter_directive("warn", 2, true), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("info");
        init("not a ==valid directive");
    }
}
