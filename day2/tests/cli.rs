use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run(input: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_day2"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn prints_both_totals() {
    let (ok, stdout) = run("2x3x4\n1x1x10\n");

    assert!(ok);
    assert_eq!(stdout, "Part1 101\nPart2 82\n");
}

#[test]
fn bad_lines_still_exit_ok() {
    let (ok, stdout) = run("2x3x4\nabc\n4294967296x4294967296x1\n\n1x1x10");

    assert!(ok);
    assert_eq!(stdout, "Part1 101\nPart2 82\n");
}

#[test]
fn empty_input() {
    let (ok, stdout) = run("");

    assert!(ok);
    assert_eq!(stdout, "Part1 0\nPart2 0\n");
}
