// tests/cli.rs
#![cfg(not(feature = "variant-long"))]

use std::process::Command;

use recurrence_eval::evaluate;
use recurrence_eval::rational::r1;

#[test]
fn binary_prints_one_line_and_exits_cleanly() {
    let out = Command::new(env!("CARGO_BIN_EXE_recurrence_eval"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs");

    assert!(out.status.success(), "exit status {:?}", out.status);
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout:?}");

    let printed: f64 = lines[0].parse().unwrap();
    assert_eq!(printed.to_bits(), evaluate(1.0, 10_000_000, r1).to_bits());
}
