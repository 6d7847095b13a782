use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

fn rdcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rdcalc")).args(args)
                                              .stdin(Stdio::null())
                                              .output()
                                              .unwrap()
}

fn rdcalc_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rdcalc")).args(args)
                                                              .stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .stderr(Stdio::piped())
                                                              .spawn()
                                                              .unwrap();
    child.stdin
         .take()
         .unwrap()
         .write_all(input.as_bytes())
         .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_the_result_and_succeeds() {
    let out = rdcalc(&["2 + 3 * 4"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "14\n");

    let out = rdcalc(&["100 / 2 + 1"]);
    assert_eq!(stdout(&out), "51\n");
}

#[test]
fn failure_prints_a_caret_and_exits_nonzero() {
    let out = rdcalc(&["3 + a"]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("Error at position 4: Unexpected character 'a'.\n  3 + a\n      ^\n"),
            "stderr: {}",
            stderr(&out));

    let out = rdcalc(&["1 / 0"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Division by zero."));
}

#[test]
fn strict_flag_rejects_trailing_tokens() {
    let out = rdcalc(&["1 + 2 )"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3\n");

    let out = rdcalc(&["--strict", "1 + 2 )"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Error at position 6"), "stderr: {}", stderr(&out));
}

#[test]
fn max_depth_flag_bounds_nesting() {
    let out = rdcalc(&["--max-depth", "2", "((1))"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "1\n");

    let out = rdcalc(&["--max-depth", "1", "((1))"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Error at position 1"), "stderr: {}", stderr(&out));
}

#[test]
fn tokens_and_ast_flags_show_each_stage() {
    let out = rdcalc(&["--tokens", "--ast", "(1 + 2) * 3"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out),
               "tokens: (@0 1@1 +@3 2@5 )@6 *@8 3@10\nast: ((1 + 2) * 3)\n9\n");
}

#[test]
fn stdin_lines_are_evaluated_one_by_one() {
    let out = rdcalc_stdin(&[], "1 + 1\n\n2 * 3\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "2\n6\n");

    let out = rdcalc_stdin(&[], "1 + 1\n1 +\n4\n");
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "2\n4\n");
    assert!(stderr(&out).contains("Error at position 3"), "stderr: {}", stderr(&out));
}

#[test]
fn missing_file_is_reported() {
    let out = rdcalc(&["--file", "/nonexistent/rdcalc/expression.txt"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Failed to read the input file"));
}
