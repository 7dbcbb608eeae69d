//! CLI tests for the collatz binary.
//!
//! Spawns the built binary and verifies the reported winner for known
//! limits, the trivial-range behavior, and argument rejection.

use std::process::{Command, Output};

fn collatz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collatz"))
        .args(args)
        .output()
        .expect("run collatz")
}

#[test]
fn reports_winner_for_ten() {
    let out = collatz(&["10"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert_eq!(stdout.trim(), "9 takes the most steps at 19.");
}

#[test]
fn trivial_limits_report_value_one() {
    for limit in ["1", "2"] {
        let out = collatz(&[limit]);
        assert!(out.status.success(), "limit {limit}");
        let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
        assert_eq!(stdout.trim(), "1 takes the most steps at 0.", "limit {limit}");
    }
}

#[test]
fn rejects_bad_arguments() {
    let cases: &[&[&str]] = &[
        &[],
        &["abc"],
        &["-5"],
        &["18446744073709551616"],
        &["3", "4"],
    ];
    for args in cases {
        let out = collatz(args);
        assert!(!out.status.success(), "args {args:?} should be rejected");
        assert!(out.stdout.is_empty(), "no result for args {args:?}");
    }
}
