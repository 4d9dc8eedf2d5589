use std::process::{Command, Output};

fn yield_main(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yield-main"))
        .args(args)
        .env_remove("YIELD_MAIN_LOG")
        .output()
        .expect("Failed to run yield-main")
}

#[test]
fn test_sleep_command() {
    let output = yield_main(&["sleep", "20"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("slept 20.0 ms"), "stdout: {}", stdout);
}

#[test]
fn test_sleep_rejects_negative_duration() {
    let output = yield_main(&["sleep", "-5"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot sleep for -5.0 ms"), "stderr: {}", stderr);
    assert!(stderr.contains("must not be negative"), "stderr: {}", stderr);
}

#[test]
fn test_sleep_rejects_nan() {
    let output = yield_main(&["sleep", "NaN"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("finite"), "stderr: {}", stderr);
}

#[test]
fn test_yield_command() {
    let output = yield_main(&["yield", "--count", "100"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("yielded 100 times"), "stdout: {}", stdout);
}

#[test]
fn test_sleep_requires_an_argument() {
    let output = yield_main(&["sleep"]);
    assert!(!output.status.success());
}

#[test]
fn test_sleep_error_keeps_large_numbers_short() {
    let output = yield_main(&["sleep", "1e300"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot sleep for 1e300 ms"), "stderr: {}", stderr);
    assert!(stderr.contains("duration of 1e300 ms"), "stderr: {}", stderr);
    assert!(stderr.len() < 200, "stderr: {}", stderr);
}

#[test]
fn test_check_command() {
    let output = yield_main(&["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let results: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("PASS") || line.contains("FAIL"))
        .collect();
    assert_eq!(results.len(), 7, "stdout: {}", stdout);

    // Timing on a busy machine can miss the tight bounds; either way the
    // exit status has to agree with the report
    if results.iter().any(|line| line.contains("FAIL")) {
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("checks failed"), "stderr: {}", stderr);
    } else {
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(stdout.contains("all 7 checks passed"), "stdout: {}", stdout);
    }
}
