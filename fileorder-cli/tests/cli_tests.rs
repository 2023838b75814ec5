use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn fileorder() -> Command {
    let mut cmd = Command::cargo_bin("fileorder").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn notes() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in ["01 Intro.md", "02 Body.md", "03 Outro.md"] {
        temp_dir.child(name).write_str(name).unwrap();
    }
    temp_dir
}

fn listing(temp_dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_command() {
    fileorder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Keep files and folders in a chosen order",
        ));
}

#[test]
fn test_version_subcommand() {
    fileorder()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fileorder 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    fileorder()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r#"\{"name":"fileorder","version":"0\.1\.0"\}"#).unwrap(),
        );
}

#[test]
fn test_inspect_reports_convention() {
    let temp_dir = notes();
    temp_dir.child("Stray.md").touch().unwrap();

    fileorder()
        .arg("inspect")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 4 entries"))
        .stdout(predicate::str::contains(
            "Convention: delimiter [1 space], min width 2, starting at 1",
        ))
        .stdout(predicate::str::contains("Outlier: Stray.md -> 04 Stray.md"));
}

#[test]
fn test_reorder_dry_run_leaves_files_alone() {
    let temp_dir = notes();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--order", "02 Body.md", "--dry-run", "--preview", "none"])
        .assert()
        .success()
        .stdout("Fileorder reorder: 2 renames planned (dry run)\n");

    assert_eq!(
        listing(&temp_dir),
        vec!["01 Intro.md", "02 Body.md", "03 Outro.md"]
    );
}

#[test]
fn test_reorder_renames_only_moved_entries() {
    let temp_dir = notes();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--order", "02 Body.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 of 2 entries"));

    assert_eq!(
        listing(&temp_dir),
        vec!["01 Body.md", "02 Intro.md", "03 Outro.md"]
    );
    temp_dir.child("01 Body.md").assert("02 Body.md");
}

#[test]
fn test_reorder_move_to_position() {
    let temp_dir = notes();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--move", "03 Outro.md:1", "--quiet"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        listing(&temp_dir),
        vec!["01 Outro.md", "02 Intro.md", "03 Body.md"]
    );
}

#[test]
fn test_reorder_with_new_delimiter_json() {
    let temp_dir = notes();

    let output = fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--delimiter", ". ", "--dry-run", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "reorder");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["summary"]["renames"], 3);
    assert_eq!(json["groups"][0]["plan"]["renames"][0]["to"], "01. Intro.md");
}

#[test]
fn test_reorder_folders_separately() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("Beta").create_dir_all().unwrap();
    temp_dir.child("Alpha").create_dir_all().unwrap();
    temp_dir.child("notes.md").touch().unwrap();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--folders", "--order", "Beta", "--prefix-min-length", "2"])
        .assert()
        .success();

    assert_eq!(listing(&temp_dir), vec!["00 Beta", "01 Alpha", "notes.md"]);
}

#[test]
fn test_reorder_unknown_entry_is_invalid_input() {
    let temp_dir = notes();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--order", "Missing.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("entry not found: 'Missing.md'"));
}

#[test]
fn test_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    fileorder()
        .arg("inspect")
        .arg(temp_dir.path().join("nope"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_fix_numbers_strays() {
    let temp_dir = notes();
    temp_dir.child("Appendix.md").touch().unwrap();

    fileorder()
        .arg("fix")
        .arg(temp_dir.path())
        .args(["--preview", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appendix.md -> 04 Appendix.md"));

    temp_dir.child("04 Appendix.md").assert(predicate::path::exists());
}

#[test]
fn test_clear_strips_prefixes() {
    let temp_dir = notes();
    temp_dir.child("1 Assets").create_dir_all().unwrap();

    fileorder()
        .arg("clear")
        .arg(temp_dir.path())
        .arg("--files")
        .assert()
        .success();

    assert_eq!(
        listing(&temp_dir),
        vec!["1 Assets", "Body.md", "Intro.md", "Outro.md"]
    );
}

#[test]
fn test_clear_collision_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("1 Intro.md").touch().unwrap();
    temp_dir.child("Intro.md").touch().unwrap();

    fileorder()
        .arg("clear")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("name collision"));
}

#[test]
fn test_local_config_supplies_defaults() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("Intro.md").touch().unwrap();
    temp_dir.child("Body.md").touch().unwrap();
    temp_dir
        .child(".fileorder.toml")
        .write_str("[defaults]\ndelimiter = \"_\"\nprefix_min_length = 3\nstarting_index = 1\n")
        .unwrap();

    fileorder()
        .arg("reorder")
        .arg(temp_dir.path())
        .args(["--order", "Intro.md"])
        .assert()
        .success();

    assert_eq!(
        listing(&temp_dir),
        vec![".fileorder.toml", "001_Intro.md", "002_Body.md"]
    );
}

#[test]
fn test_explicit_config_with_ignore_pattern() {
    let temp_dir = notes();
    temp_dir.child("index.md").touch().unwrap();
    let config = TempDir::new().unwrap();
    config
        .child("fileorder.toml")
        .write_str("[defaults]\nignore_pattern = '^index\\.md$'\n")
        .unwrap();

    fileorder()
        .arg("--config")
        .arg(config.child("fileorder.toml").path())
        .arg("fix")
        .arg(temp_dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to rename"));
}
