//! Tests for exit code policies (--fail-on flag)

use dns_audit::FailOn;

#[test]
fn test_never_always_succeeds() {
    assert_eq!(FailOn::Never.exit_code(0, 100, 100), 0);
    assert_eq!(FailOn::Never.exit_code(10, 0, 0), 0);
}

#[test]
fn test_any_failure() {
    assert_eq!(FailOn::AnyFailure.exit_code(10, 100, 0), 0);
    assert_eq!(FailOn::AnyFailure.exit_code(10, 100, 1), 2);
    assert_eq!(FailOn::AnyFailure.exit_code(10, 0, 0), 0);
}

#[test]
fn test_pct_threshold_is_exclusive() {
    assert_eq!(FailOn::PctGreaterThan.exit_code(10, 10, 1), 0);
    assert_eq!(FailOn::PctGreaterThan.exit_code(10, 9, 1), 2);
    assert_eq!(FailOn::PctGreaterThan.exit_code(0, 1000, 1), 2);
    assert_eq!(FailOn::PctGreaterThan.exit_code(100, 4, 4), 0);
}

#[test]
fn test_pct_threshold_empty_run() {
    assert_eq!(FailOn::PctGreaterThan.exit_code(0, 0, 0), 0);
}
