//! Integration tests for the lox binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn lox() -> Command {
    Command::cargo_bin("lox").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// ============================================================================
// Text Mode
// ============================================================================

#[test]
fn eval_simple_expression() {
    let assert = lox().arg("-e").arg("1 + 2").assert();
    assert
        .success()
        .stdout("NUMBER 1 1\nPLUS + null\nNUMBER 2 2\nEOF  null\n")
        .stderr("");
}

#[test]
fn eval_empty_source() {
    let assert = lox().arg("-e").arg("").assert();
    assert.success().stdout("EOF  null\n");
}

#[test]
fn eval_operator_pairs() {
    let assert = lox().arg("-e").arg("!= = <= >").assert();
    assert.success().stdout(
        "BANG_EQUAL != null\nEQUAL = null\nLESS_EQUAL <= null\nGREATER > null\nEOF  null\n",
    );
}

#[test]
fn eval_lexical_error() {
    let assert = lox().arg("-e").arg("1 @ 2").assert();
    assert
        .code(65)
        .stdout("NUMBER 1 1\nNUMBER 2 2\nEOF  null\n")
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character."));
}

#[test]
fn script_file() {
    let assert = lox().arg(fixture("program.lox")).assert();
    assert
        .success()
        .stdout(predicate::str::contains("FUN fun null"))
        .stdout(predicate::str::contains("STRING \"hello, \" hello, "))
        .stdout(predicate::str::contains("GREATER_EQUAL >= null"))
        .stdout(predicate::str::contains("NUMBER 3 3"))
        .stdout(predicate::str::ends_with("EOF  null\n"));
}

#[test]
fn script_file_with_errors() {
    let assert = lox().arg(fixture("errors.lox")).assert();
    assert
        .code(65)
        .stdout(predicate::str::contains("VAR var null"))
        .stderr(predicate::str::contains("[line 2] Error: Unexpected character."))
        .stderr(predicate::str::contains("[line 4] Error: Unterminated string."));
}

#[test]
fn missing_script_file() {
    let assert = lox().arg(fixture("does_not_exist.lox")).assert();
    assert
        .code(66)
        .stderr(predicate::str::contains("Error reading file"));
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn too_many_arguments() {
    let assert = lox().arg("one.lox").arg("two.lox").assert();
    assert.code(64);
}

#[test]
fn invalid_output_format() {
    let assert = lox().arg("-o").arg("yaml").arg("-e").arg("1").assert();
    assert
        .code(64)
        .stderr(predicate::str::contains("Invalid output format: 'yaml'"));
}

#[test]
fn help_flag() {
    let assert = lox().arg("-h").assert();
    assert.success().stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag() {
    let assert = lox().arg("-v").assert();
    assert
        .success()
        .stdout(predicate::str::starts_with("lox scanner "));
}

// ============================================================================
// JSON / JSONL
// ============================================================================

#[test]
fn json_output() {
    let assert = lox().arg("-o").arg("json").arg("-e").arg("print \"hi\";").assert();
    assert
        .success()
        .stdout(predicate::str::contains(r#""type":"scan""#))
        .stdout(predicate::str::contains(r#""status":"complete""#))
        .stdout(predicate::str::contains(
            r#"{"type":"STRING","lexeme":"\"hi\"","literal":"hi","line":1}"#,
        ))
        .stdout(predicate::str::contains(r#""errors":[]"#));
}

#[test]
fn json_output_with_error() {
    let assert = lox().arg("-o").arg("json").arg("-e").arg("\"open").assert();
    assert
        .code(65)
        .stdout(predicate::str::contains(r#""status":"error""#))
        .stdout(predicate::str::contains(
            r#"{"line":1,"location":"","message":"Unterminated string."}"#,
        ))
        .stderr("");
}

#[test]
fn jsonl_output() {
    let assert = lox().arg("-o").arg("jsonl").arg("-e").arg("var x;").assert();
    let output = assert.success().get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains(r#""record":"token","type":"VAR""#));
    assert!(lines[3].contains(r#""type":"EOF""#));
    assert_eq!(lines[4], r#"{"record":"summary","status":"complete","tokens":4,"errors":0}"#);
}

// ============================================================================
// Prompt Mode
// ============================================================================

#[test]
fn prompt_scans_each_line() {
    let assert = lox().write_stdin("var a = 1;\n@\nprint a;\n").assert();
    assert
        .success()
        .stdout(predicate::str::contains("VAR var null"))
        .stdout(predicate::str::contains("PRINT print null"))
        .stdout(predicate::str::contains("Exiting lox scanner..."))
        .stderr(predicate::str::contains("[line 1] Error: Unexpected character."));
}

#[test]
fn prompt_lines_are_independent() {
    // Each line restarts at line 1, so the unterminated string on the first line
    // must not swallow the second one.
    let assert = lox().write_stdin("\"open\nnil\n").assert();
    assert
        .success()
        .stdout(predicate::str::contains("NIL nil null"))
        .stderr(predicate::str::contains("[line 1] Error: Unterminated string."));
}

#[test]
fn prompt_empty_input() {
    let assert = lox().write_stdin("").assert();
    assert
        .success()
        .stdout(predicate::str::contains("Exiting lox scanner..."));
}
