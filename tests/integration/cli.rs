//! Running the binary's subcommands against a temp data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipe_book(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipe-book").expect("binary built");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_add_then_list_across_processes() {
    let dir = TempDir::new().unwrap();

    recipe_book(&dir)
        .args([
            "add",
            "--name",
            "Tea",
            "--ingredients",
            "water, tea leaves",
            "--instructions",
            "Boil.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added recipe"));

    recipe_book(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea"))
        .stdout(predicate::str::contains("Ingredients: water, tea leaves"));

    assert!(dir.path().join("recipe-book.db").exists());
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_list_json_on_empty_book() {
    let dir = TempDir::new().unwrap();
    recipe_book(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_add_rejects_empty_field() {
    let dir = TempDir::new().unwrap();
    recipe_book(&dir)
        .args([
            "add",
            "--name",
            "Tea",
            "--ingredients",
            "",
            "--instructions",
            "Boil.",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ingredients (comma separated) is required"));
}

#[test]
fn test_remove_unknown_id_succeeds() {
    let dir = TempDir::new().unwrap();
    recipe_book(&dir)
        .args(["remove", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipe with id 12345"));
}

#[test]
fn test_ephemeral_add_leaves_no_recipes() {
    let dir = TempDir::new().unwrap();
    recipe_book(&dir)
        .args([
            "--ephemeral",
            "add",
            "--name",
            "Tea",
            "--ingredients",
            "water",
            "--instructions",
            "Boil.",
        ])
        .assert()
        .success();
    assert!(!dir.path().join("recipe-book.db").exists());

    recipe_book(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes yet."));
}

#[test]
fn test_show_config_prints_defaults() {
    let dir = TempDir::new().unwrap();
    recipe_book(&dir)
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("key = \"recipes\""))
        .stdout(predicate::str::contains("edit_mode = \"replace\""));
}
