use assert_cmd::Command;
use predicates::prelude::*;

fn console() -> Command {
    Command::cargo_bin("launchsim").expect("launchsim bin")
}

#[test]
fn full_mission_ends_in_fuel_exhaustion() {
    console()
        .write_stdin("start_checks\nlaunch\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All systems are go for launch."))
        .stdout(predicate::str::contains(
            "T+10s  fuel: 0%  altitude: 100 km  speed: 10000 km/h",
        ))
        .stdout(predicate::str::contains("Mission failed due to insufficient fuel."))
        .stdout(predicate::str::contains("Orbit achieved").not());
}

#[test]
fn launch_from_the_pad_is_rejected() {
    console()
        .write_stdin("launch\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You must start the pre-launch checks first."))
        .stdout(predicate::str::contains("T+").not());
}

#[test]
fn fast_forward_before_checks_is_rejected_by_both_entry_points() {
    console()
        .write_stdin("fast_forward 5\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You must start the pre-launch checks first."))
        .stdout(predicate::str::contains("Cannot fast forward during pre-launch checks."));
}

#[test]
fn malformed_seconds_never_reach_the_engine() {
    console()
        .write_stdin("start_checks\nfast_forward five\nfast_forward 0\nfast_forward\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a positive number of seconds.").count(2))
        .stdout(predicate::str::contains("Usage: fast_forward <seconds>"))
        .stdout(predicate::str::contains("T+").not());
}

#[test]
fn commands_after_completion_are_no_ops() {
    console()
        .write_stdin("start_checks\nlaunch\nstart_checks\nlaunch\nfast_forward 3\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission is already completed.").count(4))
        .stdout(predicate::str::contains("T+11s").not());
}

#[test]
fn unknown_commands_keep_the_console_alive() {
    console()
        .write_stdin("abort\nstart_checks\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: abort"))
        .stdout(predicate::str::contains("All systems are go for launch."))
        .stdout(predicate::str::contains("Exiting the simulator."));
}

#[test]
fn demo_emits_json_step_reports() {
    let output = console().args(["demo", "--json"]).output().expect("run demo");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("json step report"))
        .collect();
    assert_eq!(reports.len(), 10);
    assert_eq!(reports[0]["snapshot"]["fuel_percent"], 90);
    assert_eq!(reports[9]["snapshot"]["altitude_km"], 100);
    assert_eq!(reports[9]["outcome"], "FuelExhausted");
}
