//! App-wide constants.
//!
//! Centralises the tool name, build metadata and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "arith";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Log filter used when neither `-v` nor [`ENV_LOG`] is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

/// `tracing_subscriber::EnvFilter` directive, e.g. `arith=debug`.
pub const ENV_LOG: &str = "ARITH_LOG";
