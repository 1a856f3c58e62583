use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rangeguess"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute rangeguess");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for rangeguess")
}

fn assert_success(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        stdout
    );
    stdout
}

#[test]
fn test_prompted_target_zero() {
    let output = run_with_stdin(&[], "0\n");
    let stdout = assert_success(&output);

    assert!(
        stdout.contains("Please input a number between 0 and 999999999999999 :"),
        "Should prompt for a number"
    );
    assert!(
        stdout.contains("Counting iterations and time to find 0 using 10000 threads..."),
        "Should announce the search"
    );
    assert!(
        stdout.contains("worker-0 found the number with 1 iterations."),
        "First worker should match immediately"
    );
    assert!(
        stdout.contains("The number of total threads created to find the number is 1"),
        "Only one range should be generated"
    );
    assert!(
        stdout.contains("between 0 and 999999999999999 is 1"),
        "Total iterations should be 1"
    );
    assert!(
        stdout.contains("Total elapsed time:"),
        "Should report elapsed time"
    );
}

#[test]
fn test_malformed_input_ends_run() {
    let output = run_with_stdin(&[], "abc\n");
    let stdout = assert_success(&output);

    assert!(
        stdout.contains("invalid input! Please start the program again."),
        "Should report invalid input"
    );
    assert!(
        !stdout.contains("Counting iterations"),
        "Should not start a search"
    );
}

#[test]
fn test_out_of_range_input_prompts_again() {
    let output = run_with_stdin(&[], "-1\n1000000000000000\n7\n");
    let stdout = assert_success(&output);

    assert_eq!(
        stdout.matches("Please input a number between 0 and 999999999999999! ").count(),
        2,
        "Each out-of-range value should be answered"
    );
    assert!(
        stdout.contains("worker-0 found the number with 8 iterations."),
        "Should search for the value entered last"
    );
}

#[test]
fn test_target_flag_skips_prompt() {
    let output = run_with_stdin(&["--target", "99"], "");
    let stdout = assert_success(&output);

    assert!(!stdout.contains("Please input"), "Should not prompt");
    assert!(stdout.contains("worker-0 found the number with 100 iterations."));
    assert!(stdout.contains("between 0 and 999999999999999 is 100"));
}

#[test]
fn test_invalid_target_flag_fails() {
    for value in ["abc", "-1", "1000000000000000"] {
        let output = run_with_stdin(&["--target", value], "");

        assert!(
            !output.status.success(),
            "--target {} should be rejected",
            value
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid --target"), "stderr: {}", stderr);
    }
}

#[test]
fn test_empty_input_fails() {
    let output = run_with_stdin(&[], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no number was entered"), "stderr: {}", stderr);
}
