//! End-to-end tests for the `arith` binary.
//!
//! Runs the compiled executable and checks stdout, stderr and exit code.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const EXPECTED: &str = "\
Addition: 5 + 3 = 8
Subtraction: 10 - 4 = 6
Multiplication: 6 * 7 = 42
Division: 15 / 3 = 5
Power: 2^8 = 256.0
";

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_arith")
}

fn run(args: &[&str], log: Option<&str>) -> Output {
    let mut cmd = Command::new(bin());
    cmd.args(args).env_remove("ARITH_LOG");
    if let Some(directive) = log {
        cmd.env("ARITH_LOG", directive);
    }
    cmd.output().expect("failed to run arith")
}

#[test]
fn no_arguments_prints_five_samples() {
    let output = run(&[], None);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn demo_subcommand_matches_default() {
    let output = run(&["demo"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn logging_goes_to_stderr_only() {
    let output = run(&[], Some("debug"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("performing addition"), "stderr:\n{stderr}");
    assert!(stderr.contains("performing exponentiation"), "stderr:\n{stderr}");
}

#[test]
fn verbose_flag_enables_debug_events() {
    let output = run(&["-vv"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(String::from_utf8_lossy(&output.stderr).contains("performing division"));
}

#[test]
fn version_prints_name_and_version() {
    let output = run(&["version"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("arith"), "stdout:\n{stdout}");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout:\n{stdout}");
}

#[test]
fn unknown_argument_fails() {
    let output = run(&["5", "+", "3"], None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
