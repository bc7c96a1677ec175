use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn methodsig() -> Command {
    let mut command = Command::cargo_bin("methodsig").expect("binary is built");
    command.env_remove("RUST_LOG");
    command
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn malformed_signature_fails_after_parsing_the_rest() {
    let assert = methodsig()
        .args(["parse", "void log(String)", "int f()"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();

    let stdout = stdout_of(output);
    assert!(stdout.contains("name: \"f\""), "stdout: {stdout}");
    assert!(!stdout.contains("name: \"log\""), "stdout: {stdout}");

    let stderr = stderr_of(output);
    assert!(
        stderr.contains(
            "void log(String): invalid argument description: `String`"
        ),
        "stderr: {stderr}"
    );
    assert!(
        stderr.contains("1 of 2 signatures are malformed"),
        "stderr: {stderr}"
    );
}

#[test]
fn valid_signatures_succeed_quietly() {
    let assert = methodsig()
        .args(["parse", "public DateTime getCurrentDateTime()"])
        .assert()
        .success();
    let output = assert.get_output();

    assert!(stdout_of(output).contains("return_type: \"DateTime\""));
    assert_eq!(stderr_of(output), "");
}

#[test]
fn file_input_skips_blank_lines() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("signatures.txt");
    fs::write(&path, "int a()\n\n   \npublic void b(int x)\n")
        .expect("write signatures");

    let assert = methodsig()
        .arg("parse")
        .arg("--file")
        .arg(&path)
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());

    assert!(stdout.contains("name: \"a\""), "stdout: {stdout}");
    assert!(stdout.contains("name: \"b\""), "stdout: {stdout}");
}

#[test]
fn file_input_follows_arguments() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("signatures.txt");
    fs::write(&path, "void second()\n").expect("write signatures");

    let assert = methodsig()
        .args(["parse", "void first()", "--file"])
        .arg(&path)
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());

    let first = stdout.find("\"first\"").expect("first is printed");
    let second = stdout.find("\"second\"").expect("second is printed");
    assert!(first < second, "stdout: {stdout}");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.txt");

    let assert = methodsig()
        .arg("parse")
        .arg("--file")
        .arg(&path)
        .assert()
        .failure();
    let stderr = stderr_of(assert.get_output());

    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}

#[test]
fn split_whole_delimiters_prints_one_token_per_line() {
    methodsig()
        .args(["split", "a::b", "-d", "::", "--whole"])
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn split_by_characters_is_the_default() {
    methodsig()
        .args(["split", "a:b::c", "-d", "::"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");

    methodsig()
        .args(["split", "a:b::c", "-d", "::", "--whole"])
        .assert()
        .success()
        .stdout("a:b\nc\n");
}

#[test]
fn split_requires_a_delimiter() {
    methodsig().args(["split", "a,b"]).assert().failure();
}
