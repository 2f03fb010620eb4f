//! Sniffer behavior against stand-in tools.

use proptest::prelude::*;
use rwmem_sniff::{
    SniffError, Sniffer, SnifferConfig,
    process::RunError,
    sniffer::{PREFIX_LEN, extract_value},
};

fn sniffer_with(tool: &str) -> Sniffer {
    Sniffer::new(SnifferConfig::new(tool))
}

#[test]
fn test_value_after_prefix() {
    // printf echoes its format argument, so the address is the tool output
    let value = sniffer_with("printf")
        .sniff("000000000000000000000VALUE")
        .expect("sniff failed");
    assert_eq!(value, "VALUE");
}

#[test]
fn test_trailing_newline_is_kept() {
    let value = sniffer_with("echo")
        .sniff("000000000000000000000VALUE")
        .expect("sniff failed");
    assert_eq!(value, "VALUE\n");
}

#[test]
fn test_short_output_fails() {
    let err = sniffer_with("printf").sniff("0x43c0").unwrap_err();
    assert!(matches!(err, SniffError::OutputTooShort { len: 6, .. }));
}

#[test]
fn test_spawn_failure_is_distinct() {
    let err = sniffer_with("/nonexistent/rwmem.elf")
        .sniff("0x43c00000")
        .unwrap_err();
    assert!(matches!(err, SniffError::Run(RunError::Spawn { .. })));
}

#[test]
fn test_address_is_not_shell_interpreted() {
    let address = "000000000000000000000$(echo pwned); `id` | cat";
    let value = sniffer_with("printf").sniff(address).expect("sniff failed");
    assert_eq!(value, "$(echo pwned); `id` | cat");
}

#[test]
fn test_long_output_spans_many_chunks() {
    let tail = "7".repeat(1000);
    let address = format!("{}{}", "0".repeat(PREFIX_LEN), tail);
    let value = sniffer_with("printf").sniff(&address).expect("sniff failed");
    assert_eq!(value, tail);
}

proptest! {
    #[test]
    fn prop_extract_drops_exactly_prefix(output in "\\PC{21,80}") {
        let expected: String = output.chars().skip(PREFIX_LEN).collect();
        prop_assert_eq!(extract_value(&output).unwrap(), expected.as_str());
    }

    #[test]
    fn prop_extract_rejects_short_output(output in "[ -~\n]{0,20}") {
        let is_too_short = matches!(
            extract_value(&output),
            Err(SniffError::OutputTooShort { .. })
        );
        prop_assert!(is_too_short);
    }
}
