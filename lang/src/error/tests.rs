use super::*;
use expect_test::expect;

#[test]
fn diagnostic_display_without_location() {
    let diagnostic = Diagnostic::new(3, "", "Unexpected character.");
    let display = format!("{}", diagnostic);
    expect![[r#"[line 3] Error: Unexpected character."#]].assert_eq(&display);
}

#[test]
fn diagnostic_display_with_location() {
    let diagnostic = Diagnostic::new(12, "=", "Invalid assignment target.");
    let display = format!("{}", diagnostic);
    expect![[r#"[line 12] Error at '=': Invalid assignment target."#]].assert_eq(&display);
}

#[test]
fn diagnostics_start_empty() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert!(!diagnostics.had_error());
    assert_eq!(diagnostics.len(), 0);
}

#[test]
fn diagnostics_keep_report_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(1, "", "first");
    diagnostics.report(4, "x", "second");

    assert!(diagnostics.had_error());
    assert_eq!(diagnostics.len(), 2);

    let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    expect![[r#"
        [
            "[line 1] Error: first",
            "[line 4] Error at 'x': second",
        ]
    "#]]
    .assert_debug_eq(&rendered);
}

#[test]
fn diagnostics_into_vec() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(2, "", "oops");

    assert_eq!(diagnostics.into_vec(), vec![Diagnostic::new(2, "", "oops")]);
}

#[test]
fn closure_is_a_reporter() {
    let mut seen = Vec::new();
    {
        let mut reporter = |line: usize, location: &str, message: &str| {
            seen.push((line, location.to_string(), message.to_string()));
        };
        reporter.report(7, "", "bad");
    }

    assert_eq!(seen, vec![(7, String::new(), "bad".to_string())]);
}
