//! Tracing subscriber set-up.
//!
//! Diagnostics go to stderr so stdout carries only the demonstration lines.
//! Filter priority (highest to lowest):
//! 1. `-v` count from the CLI
//! 2. `ARITH_LOG` environment variable
//! 3. [`DEFAULT_LOG_FILTER`]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

/// Pick the filter directive for the given verbosity and `ARITH_LOG` value.
///
/// A blank `ARITH_LOG` counts as unset.
pub fn resolve_filter(verbose: u8, env_directive: Option<&str>) -> String {
    match verbose {
        0 => env_directive
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let directive = std::env::var(ENV_LOG).ok();
    init_with(verbose, directive.as_deref());
}

fn init_with(verbose: u8, env_directive: Option<&str>) {
    static INIT: Once = Once::new();

    let filter = resolve_filter(verbose, env_directive);
    INIT.call_once(|| {
        let filter_layer = EnvFilter::try_new(&filter).unwrap_or_else(|_| {
            eprintln!("warning: invalid {ENV_LOG} directive {filter:?}, using {DEFAULT_LOG_FILTER}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_layer)
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .try_init();
    });
}
