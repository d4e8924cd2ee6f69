//! arith — minimal arithmetic calculator (library crate).
//!
//! Re-exports public modules for the binary and integration tests.

pub mod constants;
pub mod demo;
pub mod logging;
pub mod ops;
