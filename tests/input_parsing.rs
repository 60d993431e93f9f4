//! Tests for host list and record-type parsing at the configuration boundary.

use dns_audit::{parse_host_lines, ConfigError, RecordRoster};
use hickory_proto::rr::RecordType;

#[test]
fn test_host_list_normalization() {
    let hosts = parse_host_lines(
        "# production\nexample.com\n\n  mail.example.com.\r\n# staging\nxn--bcher-kva.example\n",
    )
    .unwrap();
    assert_eq!(
        hosts,
        vec!["example.com", "mail.example.com", "xn--bcher-kva.example"]
    );
}

#[test]
fn test_host_list_keeps_duplicates_and_order() {
    let hosts = parse_host_lines("b.example\na.example\nb.example\n").unwrap();
    assert_eq!(hosts, vec!["b.example", "a.example", "b.example"]);
}

#[test]
fn test_host_list_rejects_overlong_name() {
    let label = "a".repeat(63);
    let name = vec![label.as_str(); 5].join(".");
    let err = parse_host_lines(&format!("# header\n{name}\n")).unwrap_err();
    match err {
        ConfigError::InvalidHost { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidHost, got {other:?}"),
    }
}

#[test]
fn test_roster_tokens_and_string_agree() {
    let from_tokens = RecordRoster::from_tokens(vec!["a", " Mx ", "A"]).unwrap();
    let from_string = RecordRoster::parse("a, Mx ,A").unwrap();
    assert_eq!(from_tokens, from_string);
    assert_eq!(
        from_string.iter().collect::<Vec<_>>(),
        vec![RecordType::A, RecordType::MX]
    );
}

#[test]
fn test_roster_rejects_invalid_tokens() {
    for records in ["A,NOPE", "A;AAAA", "opt"] {
        assert!(
            matches!(
                RecordRoster::parse(records),
                Err(ConfigError::InvalidRecordType(_))
            ),
            "{records} should be rejected"
        );
    }
    assert!(matches!(
        RecordRoster::parse(""),
        Err(ConfigError::EmptyRoster)
    ));
}
