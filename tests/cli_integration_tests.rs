//! Integration tests for the echoes binary
//!
//! These run the compiled binary and check:
//! - Exact stdout for each command
//! - Validation errors on stderr with exit code 1
//! - Usage errors with exit code 2
//! - Graceful shutdown of `echo forever` on SIGINT

use assert_cmd::Command;
use predicates::prelude::*;

fn echoes() -> Command {
    Command::cargo_bin("echoes").unwrap()
}

#[test]
fn test_greeting_default() {
    echoes()
        .args(["greeting", "Ann"])
        .assert()
        .success()
        .stdout("Hi Ann!\n")
        .stderr("");
}

#[test]
fn test_greeting_custom() {
    echoes()
        .args(["greeting", "Ann", "-g", "Yo"])
        .assert()
        .success()
        .stdout("Yo Ann!\n");
}

#[test]
fn test_greeting_verbose() {
    echoes()
        .args(["greeting", "Ann", "--greeting", "Hello", "--verbose"])
        .assert()
        .success()
        .stdout("About to say hi to 'Ann'...\nHello Ann!\nAll done!\n");
}

#[test]
fn test_echo_times_plain() {
    echoes()
        .args(["echo", "times", "hi", "--count", "3", "--delay", "0"])
        .assert()
        .success()
        .stdout("hi\nhi\nhi\n")
        .stderr("");
}

#[test]
fn test_echo_times_verbose() {
    echoes()
        .args(["echo", "times", "x", "-c", "1", "-d", "0", "-v"])
        .assert()
        .success()
        .stdout("About to repeat 'x' 1 time[s]...\nx\nSleeping for 0ms...\nAll done!\n");
}

#[test]
fn test_echo_times_default_count_is_one() {
    echoes()
        .args(["echo", "times", "once", "-d", "0"])
        .assert()
        .success()
        .stdout("once\n");
}

#[test]
fn test_echo_times_zero_count() {
    echoes()
        .args(["echo", "times", "hi", "--count", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("The count needs to be at least 1.\n");
}

#[test]
fn test_echo_times_negative_count() {
    echoes()
        .args(["echo", "times", "hi", "-c", "-3", "-v"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("The count needs to be at least 1.\n");
}

#[test]
fn test_echo_times_negative_delay() {
    echoes()
        .args(["echo", "times", "hi", "--delay=-1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("The delay needs to be 0 or a positive number.\n");
}

#[test]
fn test_echo_forever_negative_delay() {
    echoes()
        .args(["echo", "forever", "hi", "-d", "-10", "--verbose"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("The delay needs to be 0 or a positive number.\n");
}

#[test]
fn test_missing_name_is_usage_error() {
    echoes()
        .arg("greeting")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    echoes()
        .args(["shout", "hi"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn test_echo_without_subcommand_is_usage_error() {
    echoes()
        .arg("echo")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("times").and(predicate::str::contains("forever")));
}

#[test]
fn test_non_integer_count_is_usage_error() {
    echoes()
        .args(["echo", "times", "hi", "--count", "lots"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn test_help_lists_commands() {
    echoes()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("greeting")
                .and(predicate::str::contains("Say hi"))
                .and(predicate::str::contains("Stop copying me!")),
        );
}

#[test]
fn test_color_never_keeps_errors_plain() {
    echoes()
        .args(["--color", "never", "echo", "times", "hi", "-c", "0"])
        .assert()
        .code(1)
        .stderr("The count needs to be at least 1.\n");
}

#[cfg(unix)]
mod interrupt {
    use serial_test::serial;
    use std::process::{Command, Stdio};
    use std::thread;
    use std::time::Duration;

    #[test]
    #[serial]
    fn test_echo_forever_stops_on_sigint() {
        let child = Command::new(env!("CARGO_BIN_EXE_echoes"))
            .args(["echo", "forever", "hi", "--delay", "20", "--verbose"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        thread::sleep(Duration::from_millis(500));

        let status = Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout).unwrap();
        let mut lines = stdout.lines();
        assert_eq!(lines.next(), Some("About to repeat 'hi' forever..."));

        let rest: Vec<&str> = lines.collect();
        assert!(rest.len() >= 2, "expected some echoes, got {:?}", rest);
        assert!(
            rest.iter()
                .all(|line| *line == "hi" || *line == "Sleeping for 20ms..."),
            "unexpected output: {:?}",
            rest
        );
        assert!(!stdout.contains("All done!"));
    }

    #[test]
    #[serial]
    fn test_echo_times_stops_on_sigint() {
        let child = Command::new(env!("CARGO_BIN_EXE_echoes"))
            .args(["echo", "times", "hi", "--count", "1000", "--delay", "20", "-v"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        thread::sleep(Duration::from_millis(500));

        Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()
            .unwrap();

        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("About to repeat 'hi' 1000 time[s]...\nhi\n"));
        assert!(!stdout.contains("All done!"));
    }
}
