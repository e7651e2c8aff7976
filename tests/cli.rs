//! Runs the `ls8` binary and checks its exit status and output streams.

use std::path::PathBuf;
use std::process::{Command, Output};

fn ls8(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ls8"))
        .args(args)
        .output()
        .expect("failed to spawn ls8")
}

fn program(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("programs")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn default_program_prints_eight() {
    let out = ls8(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "8\n");
}

#[test]
fn fault_is_reported_once() {
    let out = ls8(&[&program("divzero.ls8")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("DIV: division by zero at pc 0x03").count(), 1, "{stderr}");
}

#[test]
fn max_steps_stops_with_status_two() {
    let out = ls8(&["--max-steps", "3", &program("countdown.ls8")]);
    assert_eq!(out.status.code(), Some(2));
    // The first three instructions are LDIs, so nothing was printed yet.
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("stopped after 3 instruction(s)"), "{stderr}");
}

#[test]
fn list_opcodes_prints_every_instruction() {
    let out = ls8(&["--list-opcodes"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 30);
    assert!(stdout.lines().any(|l| l == "A0  ADD  2 alu"));
    assert!(stdout.lines().any(|l| l == "54  JMP  1 jump"));
}

#[test]
fn missing_file_fails() {
    let out = ls8(&["/definitely/not/here.ls8"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unable to find"), "{stderr}");
}
