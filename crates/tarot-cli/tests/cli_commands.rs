//! Integration tests for the tarot CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clavtarot() -> Command {
    let mut cmd = Command::cargo_bin("clavtarot").unwrap();
    cmd.args(["--instant", "--no-color"]);
    cmd
}

// -- Readings --

#[test]
fn single_reveals_one_card() {
    clavtarot()
        .arg("single")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single Card Draw"))
        .stdout(predicate::str::contains("① The Message — What the universe wants you to hear"))
        .stdout(predicate::str::contains("② ").not());
}

#[test]
fn three_card_positions_in_order() {
    let output = clavtarot().arg("three").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let past = stdout.find("① Past").unwrap();
    let present = stdout.find("② Present").unwrap();
    let future = stdout.find("③ Future").unwrap();
    assert!(past < present && present < future);
}

#[test]
fn love_and_career_spreads() {
    clavtarot()
        .arg("love")
        .assert()
        .success()
        .stdout(predicate::str::contains("⑤ The Potential"));
    clavtarot()
        .arg("career")
        .assert()
        .success()
        .stdout(predicate::str::contains("④ Best Action"));
}

#[test]
fn celtic_cross_reveals_ten() {
    clavtarot()
        .arg("celtic")
        .assert()
        .success()
        .stdout(predicate::str::contains("⑤ Crown — The best possible outcome"))
        .stdout(predicate::str::contains("⑩ Final Outcome"))
        .stdout(predicate::str::contains("The Grand Pattern"));
}

#[test]
fn reading_as_json() {
    let output = clavtarot().args(["--json", "celtic"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["spread"], "celtic");
    let reveals = value["reveals"].as_array().unwrap();
    assert_eq!(reveals.len(), 10);
    let mut ids: Vec<u64> = reveals
        .iter()
        .map(|r| r["card"]["card"]["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

// -- Daily --

#[test]
fn daily_for_a_fixed_date() {
    clavtarot()
        .args(["daily", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday, March 15, 2024"))
        .stdout(predicate::str::contains("Card of the Day"))
        .stdout(predicate::str::contains("Death"));
}

#[test]
fn daily_is_stable_and_changes_with_date() {
    let run = |date: &str| {
        let output = clavtarot()
            .args(["--json", "daily", "--date", date])
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        (
            value["card"]["card"]["id"].as_u64().unwrap(),
            value["card"]["orientation"].as_str().unwrap().to_string(),
        )
    };
    let first = run("2024-03-15");
    assert_eq!(first, run("2024-03-15"));
    assert_eq!(first.1, "upright");
    assert_ne!(first, run("2024-03-16"));
}

#[test]
fn daily_rejects_bad_date() {
    clavtarot()
        .args(["daily", "--date", "2024-13-40"])
        .assert()
        .failure();
}

// -- Deck and guide --

#[test]
fn deck_lists_all_cards() {
    clavtarot()
        .arg("deck")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("King of Pentacles"))
        .stdout(predicate::str::contains("Total: 78 cards (22 Major + 56 Minor)"));
}

#[test]
fn guide_and_alias() {
    clavtarot()
        .arg("guide")
        .assert()
        .success()
        .stdout(predicate::str::contains("The 5 Spreads"));
    clavtarot()
        .arg("how")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upright ↑ vs Reversed ↓"));
}

#[test]
fn unknown_command_fails() {
    clavtarot().arg("tarot-party").assert().failure();
}

// -- Interactive menu --

#[test]
fn menu_reprompts_on_unknown_input() {
    clavtarot()
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The spirits don't recognize that symbol. Try 1-8 or 0 to exit.",
        ))
        .stdout(predicate::str::contains("Farewell, seeker"));
}

#[test]
fn menu_runs_a_choice_then_exits() {
    clavtarot()
        .write_stdin("7\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 78 cards"))
        .stdout(predicate::str::contains("Press Enter to return to the menu"))
        .stdout(predicate::str::contains("Farewell, seeker"));
}

#[test]
fn menu_leaves_on_eof() {
    clavtarot()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose your path"));
}

// -- Install --

#[test]
fn install_into_fresh_home() {
    let home = TempDir::new().unwrap();
    clavtarot()
        .args(["install", "--key", "fal-test-key-123456", "--persona", "luna"])
        .args(["--daily", "21:15", "--channel", "#tarot", "--root"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("clavtarot installed"))
        .stdout(predicate::str::contains("Persona: Luna"));

    let host = home.path().join(".openclaw");
    assert!(host.join("skills/clavtarot/SKILL.md").is_file());
    assert!(host.join("skills/clavtarot/data/tarot-cards.json").is_file());

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(host.join("openclaw.json")).unwrap()).unwrap();
    assert_eq!(
        config["skills"]["entries"]["clavtarot"]["apiKey"],
        "fal-test-key-123456"
    );
    let job = &config["cron"]["jobs"]["clavtarot-daily-fortune"];
    assert_eq!(job["schedule"], "15 21 * * *");
    assert_eq!(job["channel"], "#tarot");

    let soul = fs::read_to_string(host.join("workspace/SOUL.md")).unwrap();
    assert!(soul.contains("You are Luna"));
}

#[test]
fn install_merges_existing_config() {
    let home = TempDir::new().unwrap();
    let host = home.path().join(".openclaw");
    fs::create_dir_all(&host).unwrap();
    fs::write(
        host.join("openclaw.json"),
        r#"{"agent":{"model":"sonnet"},"skills":{"load":{"extraDirs":["/opt/skills"]}}}"#,
    )
    .unwrap();

    clavtarot()
        .args(["install", "--key", "fal-test-key-123456", "--no-daily", "--root"])
        .arg(home.path())
        .assert()
        .success();

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(host.join("openclaw.json")).unwrap()).unwrap();
    assert_eq!(config["agent"]["model"], "sonnet");
    let dirs = config["skills"]["load"]["extraDirs"].as_array().unwrap();
    assert_eq!(dirs.len(), 2);
    assert_eq!(dirs[0], "/opt/skills");
    assert!(config.get("cron").is_none());
}

#[test]
fn install_custom_persona() {
    let home = TempDir::new().unwrap();
    clavtarot()
        .args(["install", "--key", "fal-test-key-123456", "--persona", "custom"])
        .args(["--name", "Sibyl", "--root"])
        .arg(home.path())
        .assert()
        .success();

    let identity =
        fs::read_to_string(home.path().join(".openclaw/workspace/IDENTITY.md")).unwrap();
    assert!(identity.contains("**Name:** Sibyl"));
}

#[test]
fn install_unknown_persona_lists_choices() {
    let home = TempDir::new().unwrap();
    clavtarot()
        .args(["install", "--key", "fal-test-key-123456", "--persona", "merlin"])
        .arg("--root")
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown persona: merlin"))
        .stderr(predicate::str::contains("luna"));
    assert!(!home.path().join(".openclaw/skills/clavtarot").exists());
}

#[test]
fn reinstall_requires_force() {
    let home = TempDir::new().unwrap();
    let install = || {
        let mut cmd = clavtarot();
        cmd.args(["install", "--key", "fal-test-key-123456", "--root"])
            .arg(home.path());
        cmd
    };
    install().assert().success();
    install()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    install().arg("--force").assert().success();
}

#[test]
fn install_without_key_fails() {
    let home = TempDir::new().unwrap();
    clavtarot()
        .env_remove("FAL_KEY")
        .args(["install", "--root"])
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
    assert!(!home.path().join(".openclaw").exists());
}

#[test]
fn install_rejects_bad_time() {
    let home = TempDir::new().unwrap();
    clavtarot()
        .args(["install", "--key", "fal-test-key-123456", "--daily", "25:00", "--root"])
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid schedule"));
}
