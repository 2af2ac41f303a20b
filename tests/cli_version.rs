mod common;

use common::*;

#[test]
fn test_version_prints_crate_version() {
    let env = TestEnv::new();
    let output = env.run(&["version"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("ulstools {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let env = TestEnv::new();
    let output = env.run(&["-vvv", "hetu", "check", "010101-1234"]);

    // stdout carries only the result line
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(
        stderr(&output).contains("logging initialized"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_version_json_stream() {
    let env = TestEnv::new();
    let output = env.run(&["version", "--json"]);

    assert!(output.status.success());
    let events = ndjson(&output);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "version");
    assert_eq!(events[1]["event"], "version");
    assert_eq!(events[1]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(events[2]["event"], "complete");
    assert_eq!(events[2]["success"], true);
}
