mod common;

use assert_cmd::Command;
use predicates::str::contains;

fn script(home: &std::path::Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("household_cli")
        .unwrap()
        .env("HOUSEHOLD_CORE_HOME", home)
        .env("HOUSEHOLD_CORE_CLI_SCRIPT", "1")
        .env("NO_COLOR", "1")
        .write_stdin(input)
        .assert()
}

#[test]
fn script_mode_records_and_reports() {
    let home = common::test_dir();
    let input = "add type=income date=2025-03-01 amount=1000 responsible=both \
category=Salário payment=pix \"description=Salário março\"\nmonth 3 2025\nexit\n";

    script(&home, input)
        .success()
        .stdout(contains("recorded"))
        .stdout(contains("Lucas"))
        .stdout(contains("R$ 500,00"));

    let json = std::fs::read_to_string(home.join("financialData.json")).unwrap();
    assert!(json.contains("Salário março"));
}

#[test]
fn missing_fields_are_reported_without_saving() {
    let home = common::test_dir();
    script(&home, "add type=expense amount=10\nlist\nexit\n")
        .success()
        .stderr(contains("description"))
        .stdout(contains("No transactions"));
}

#[test]
fn goal_contribution_is_capped() {
    let home = common::test_dir();
    script(&home, "goal 2 999999\ngoal 77 10\nexit\n")
        .success()
        .stdout(contains("R$ 15.000,00 of R$ 15.000,00"))
        .stderr(contains("77"));
}

#[test]
fn unknown_command_suggests_a_match() {
    let home = common::test_dir();
    script(&home, "sumary\nexit\n")
        .success()
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn corrupt_store_stops_the_shell() {
    let home = common::test_dir();
    std::fs::write(home.join("financialData.json"), "garbage").unwrap();
    script(&home, "exit\n").failure().stderr(contains("corrupt"));
    assert_eq!(
        std::fs::read_to_string(home.join("financialData.json")).unwrap(),
        "garbage"
    );
}
