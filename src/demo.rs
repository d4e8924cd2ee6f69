//! Demonstration routine.
//!
//! Runs each operation once on fixed inputs and renders one labelled line
//! per result, e.g. `Addition: 5 + 3 = 8`.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

use crate::ops::{self, ArithmeticError};

/// One demonstration computation, already evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Operation name, e.g. `Addition`.
    pub label: &'static str,
    /// The operands as written, e.g. `5 + 3`.
    pub expression: String,
    /// The rendered result.
    pub result: String,
}

impl Sample {
    fn integer(label: &'static str, a: i64, op: &str, b: i64, result: i64) -> Self {
        Self {
            label,
            expression: format!("{a} {op} {b}"),
            result: result.to_string(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.label, self.expression, self.result)
    }
}

/// Evaluate the fixed samples in display order.
pub fn samples() -> Result<Vec<Sample>, ArithmeticError> {
    let (base, exponent) = (2.0_f64, 8);

    Ok(vec![
        Sample::integer("Addition", 5, "+", 3, ops::add(5, 3)),
        Sample::integer("Subtraction", 10, "-", 4, ops::subtract(10, 4)),
        Sample::integer("Multiplication", 6, "*", 7, ops::multiply(6, 7)),
        Sample::integer("Division", 15, "/", 3, ops::divide(15, 3)?),
        Sample {
            label: "Power",
            expression: format!("{base}^{exponent}"),
            // `{:?}` keeps the fractional digit: 256.0, not 256.
            result: format!("{:?}", ops::power(base, exponent)),
        },
    ])
}

/// Write every sample to `out`, one per line.
pub fn render(out: &mut impl Write) -> Result<()> {
    let samples = samples().context("demonstration computation failed")?;
    tracing::debug!(count = samples.len(), "rendering samples");

    for sample in &samples {
        writeln!(out, "{sample}").context("failed to write demonstration output")?;
    }
    out.flush().context("failed to flush demonstration output")?;
    Ok(())
}
