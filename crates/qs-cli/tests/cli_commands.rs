//! End-to-end tests for the `qs` command.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp directory and the campaign file path inside it.
fn campaign() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hero.json");
    (dir, path)
}

fn qs(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qs").unwrap();
    cmd.env_remove("QS_DATA")
        .env_remove("RUST_LOG")
        .arg("--data")
        .arg(data);
    cmd
}

fn document(data: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(data).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_seeded_campaign() {
    let (_dir, data) = campaign();
    qs(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created campaign").and(predicate::str::contains("Adventurer")));

    let doc = document(&data);
    assert_eq!(doc["schemaVersion"], 4);
    assert_eq!(doc["stats"]["classType"], "Commoner 1");
    assert_eq!(doc["feats"]["rows"][0]["title"], "Task Initiation");
}

#[test]
fn init_fails_if_file_exists() {
    let (_dir, data) = campaign();
    qs(&data).arg("init").assert().success();
    qs(&data)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn data_path_from_environment() {
    let (_dir, data) = campaign();
    Command::cargo_bin("qs")
        .unwrap()
        .env("QS_DATA", &data)
        .arg("init")
        .assert()
        .success();
    assert!(data.exists());
}

// ---------------------------------------------------------------------------
// sheet / classes / create / set / skill
// ---------------------------------------------------------------------------

#[test]
fn sheet_seeds_on_first_use() {
    let (_dir, data) = campaign();
    qs(&data)
        .arg("sheet")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Adventurer")
                .and(predicate::str::contains("XP 0/100"))
                .and(predicate::str::contains("qs create")),
        );
    assert!(data.exists());
}

#[test]
fn sheet_all_lists_every_skill() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["sheet", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use Magic Device"));
}

#[test]
fn classes_lists_core_classes() {
    let (_dir, data) = campaign();
    qs(&data)
        .arg("classes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Barbarian")
                .and(predicate::str::contains("Wizard"))
                .and(predicate::str::contains("d12")),
        );
}

#[test]
fn classes_apply_sets_base_numbers() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["classes", "--apply", "rogue", "--level", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level 3"));

    let doc = document(&data);
    assert_eq!(doc["stats"]["classType"], "Rogue 3");
    assert_eq!(doc["stats"]["bab"], 2);
    assert_eq!(doc["stats"]["baseRef"], 3);
}

#[test]
fn create_with_standard_array() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["create", "-n", "Mira", "-c", "Wizard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mira").and(predicate::str::contains("INT 16")));

    let doc = document(&data);
    assert_eq!(doc["stats"]["name"], "Mira");
    assert_eq!(doc["stats"]["hpMax"], 6);
    assert!(doc["journal"]["rows"][0]["content"]
        .as_str()
        .unwrap()
        .contains("Wizard"));
}

#[test]
fn create_with_seeded_roll() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["create", "-n", "Bo", "-c", "Fighter", "-m", "roll", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled:"));
}

#[test]
fn create_manual_needs_six_scores() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["create", "-n", "Bo", "-c", "Monk", "-m", "manual", "--scores", "10,12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 6 scores"));

    qs(&data)
        .args([
            "create", "-n", "Bo", "-c", "Monk", "-m", "manual", "--scores", "12,15,13,10,16,8",
        ])
        .assert()
        .success();
    assert_eq!(document(&data)["stats"]["wis"], 16);
}

#[test]
fn set_fields() {
    let (_dir, data) = campaign();
    qs(&data).args(["set", "name", "Kael"]).assert().success();
    qs(&data).args(["set", "dex-temp", "-2"]).assert().success();
    qs(&data).args(["set", "ac", "abc"]).assert().success();

    let doc = document(&data);
    assert_eq!(doc["stats"]["name"], "Kael");
    assert_eq!(doc["stats"]["dexTemp"], -2);
    assert_eq!(doc["stats"]["ac"], 0);
}

#[test]
fn set_unknown_field_fails() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["set", "luck", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn skill_update_and_show() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["skill", "stealth", "--ranks", "2", "--class-skill", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stealth").and(predicate::str::contains("total +5")));
}

#[test]
fn unknown_skill_fails() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["skill", "Juggling", "--ranks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill"));
}

// ---------------------------------------------------------------------------
// quests
// ---------------------------------------------------------------------------

#[test]
fn quest_lifecycle() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["quest", "add", "Deadlift day", "-a", "STR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added quest #1"));

    qs(&data)
        .args(["quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deadlift day"));

    qs(&data)
        .args(["quest", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+25 XP").and(predicate::str::contains("STR is now 11")));

    let doc = document(&data);
    assert_eq!(doc["stats"]["str"], 11);
    assert_eq!(doc["stats"]["xp"], 25);
    assert_eq!(doc["quests"]["rows"][0]["isCompleted"], true);

    qs(&data)
        .args(["quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quests"));
    qs(&data)
        .args(["quest", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("done"));
}

#[test]
fn quest_done_twice_fails() {
    let (_dir, data) = campaign();
    qs(&data).args(["quest", "add", "Read", "-a", "int"]).assert().success();
    qs(&data).args(["quest", "done", "1"]).assert().success();
    qs(&data)
        .args(["quest", "done", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already completed"));
    assert_eq!(document(&data)["stats"]["xp"], 25);
}

#[test]
fn quest_level_up() {
    let (_dir, data) = campaign();
    qs(&data).args(["set", "xp", "980"]).assert().success();
    qs(&data).args(["quest", "add", "Meditate", "-a", "WIS"]).assert().success();
    qs(&data)
        .args(["quest", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LEVEL UP"));
    assert_eq!(document(&data)["stats"]["level"], 2);
}

#[test]
fn quest_description_is_stored_and_listed() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["quest", "add", "Run", "-a", "CON", "--description", "5k before work"])
        .assert()
        .success();
    assert_eq!(
        document(&data)["quests"]["rows"][0]["description"],
        "5k before work"
    );
    qs(&data)
        .args(["quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5k before work"));
}

#[test]
fn quest_on_maxed_score_keeps_max() {
    let (_dir, data) = campaign();
    qs(&data).args(["set", "str", "99999999999"]).assert().success();
    qs(&data).args(["quest", "add", "Lift", "-a", "STR"]).assert().success();
    qs(&data).args(["quest", "done", "1"]).assert().success();
    assert_eq!(document(&data)["stats"]["str"], i64::from(i32::MAX));
}

#[test]
fn sheet_renders_extreme_values() {
    let (_dir, data) = campaign();
    qs(&data).args(["set", "level", "50000000"]).assert().success();
    qs(&data).args(["set", "dex", "-99999999999"]).assert().success();
    qs(&data)
        .arg("sheet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 50000000"));
}

#[test]
fn quest_bad_attribute_fails() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["quest", "add", "Nap", "-a", "LUCK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute"));
}

#[test]
fn quest_rm_missing_fails() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["quest", "rm", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quest not found: 42"));
}

// ---------------------------------------------------------------------------
// journal
// ---------------------------------------------------------------------------

#[test]
fn journal_add_list_export() {
    let (dir, data) = campaign();
    qs(&data)
        .args(["journal", "add", "Ran five kilometers."])
        .assert()
        .success();
    qs(&data)
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ran five kilometers."));

    qs(&data)
        .args(["journal", "export", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal of Adventurer"));

    let out = dir.path().join("journal.md");
    qs(&data)
        .args(["journal", "export", "-o", out.to_str().unwrap()])
        .assert()
        .success();
    let md = fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Journal of Adventurer"));
}

#[test]
fn journal_rejects_empty_entry() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["journal", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn journal_export_unknown_format() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["journal", "export", "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported export format"));
}

// ---------------------------------------------------------------------------
// feats and spells
// ---------------------------------------------------------------------------

#[test]
fn feat_add_list_rm() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["feat", "add", "Iron Will", "-d", "+2 on Will saves"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added feat #2"));
    qs(&data)
        .args(["feat", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task Initiation").and(predicate::str::contains("Iron Will")));
    qs(&data).args(["feat", "rm", "1"]).assert().success();
    assert_eq!(
        document(&data)["feats"]["rows"].as_array().unwrap().len(),
        1
    );
}

#[test]
fn spell_lifecycle() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["spell", "add", "Magic Missile", "-l", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spell #1"));
    qs(&data)
        .args(["spell", "prepare", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prepared"));
    qs(&data)
        .args(["spell", "use", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("used"));
    qs(&data)
        .args(["spell", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Magic Missile"));

    let doc = document(&data);
    assert_eq!(doc["stats"]["spells"][0]["prepared"], true);
    assert_eq!(doc["stats"]["spells"][0]["used"], true);

    qs(&data).args(["spell", "rm", "1"]).assert().success();
    qs(&data)
        .args(["spell", "rm", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spell not found"));
}

#[test]
fn spell_level_out_of_range() {
    let (_dir, data) = campaign();
    qs(&data)
        .args(["spell", "add", "Wish", "-l", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spell level"));
}

// ---------------------------------------------------------------------------
// migration
// ---------------------------------------------------------------------------

#[test]
fn opens_version_one_document() {
    let (_dir, data) = campaign();
    fs::write(
        &data,
        r#"{
  "quests": { "nextId": 1, "rows": [] },
  "journal": { "nextId": 1, "rows": [] },
  "stats": {
    "name": "Old Hero", "classType": "Fighter 1", "level": 1, "xp": 0,
    "str": 15, "dex": 10, "con": 10, "int": 10, "wis": 10, "cha": 10
  }
}"#,
    )
    .unwrap();

    qs(&data)
        .arg("sheet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Hero"));

    let doc = document(&data);
    assert_eq!(doc["schemaVersion"], 4);
    assert_eq!(doc["stats"]["strTemp"], 0);
    assert_eq!(doc["stats"]["skills"].as_array().unwrap().len(), 35);
}

#[test]
fn future_schema_is_rejected() {
    let (_dir, data) = campaign();
    fs::write(&data, r#"{ "schemaVersion": 99 }"#).unwrap();
    qs(&data)
        .arg("sheet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported schema version 99"));
}
