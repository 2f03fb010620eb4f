//! Exit codes and stdout of the `rwmem-sniff` binary.

use std::process::{Command, Output};

use rwmem_sniff::sniffer::TOOL_ENV;

fn run(tool: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rwmem-sniff"))
        .args(args)
        .env(TOOL_ENV, tool)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rwmem-sniff")
}

#[test]
fn test_no_arguments_exit_one_silently() {
    let output = run("printf", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_two_arguments_exit_one_silently() {
    let output = run("printf", &["0x10", "0x20"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prints_value_verbatim() {
    let output = run("echo", &["000000000000000000000VALUE"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"VALUE\n");
}

#[test]
fn test_no_newline_added() {
    let output = run("printf", &["Value at 0x43c00000: 0x1f"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"0x1f");
}

#[test]
fn test_short_output_fails_with_distinct_status() {
    let output = run("printf", &["short"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too short"));
}

#[test]
fn test_missing_tool_fails_with_distinct_status() {
    let output = run("/nonexistent/rwmem.elf", &["0x43c00000"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to spawn"));
}

#[test]
fn test_double_dash_alone_is_sniffed() {
    // "--" is the address, so the tool runs and its short output is the failure
    let output = run("printf", &["--"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too short"));
}

#[test]
fn test_double_dash_then_address_is_two_arguments() {
    let output = run("printf", &["--", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_double_dash_does_not_hide_extra_argument() {
    let output = run("printf", &["--", "000000000000000000000--help"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
