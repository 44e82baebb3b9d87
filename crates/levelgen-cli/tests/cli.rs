use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LEVEL_FILES: [&str; 5] = [
    "instructions.txt",
    "goal.txt",
    "setup.spec",
    "test.spec",
    "solution.txt",
];

fn project() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("gitgud/skills")).unwrap();
    fs::write(
        root.join("setup.py"),
        "setuptools.setup(\n    packages=[\n        'gitgud',\n    ],\n    package_data={\n    },\n    python_requires='>=3.6',\n)\n",
    )
    .unwrap();
    fs::write(
        root.join("gitgud/skills/__init__.py"),
        "\nfrom gitgud.skills.util import AllSkills\n\nall_skills = AllSkills([\n])\n",
    )
    .unwrap();

    let templates = root.join("level_file_templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("__init__.py"),
        "from gitgud.skills.util import Skill\n\nskill = Skill(\n    '{}',\n    [\n    ]\n)\n",
    )
    .unwrap();
    fs::write(templates.join("test_levels.py"), "# tests\n").unwrap();
    for name in LEVEL_FILES {
        fs::write(templates.join(name), name).unwrap();
    }
    tmp
}

fn make_level(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("make-level"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".no-config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let tmp = tempfile::tempdir().unwrap();
    make_level(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("SKILL_NAME"));
}

#[test]
fn test_wrong_argument_count_exits_one() {
    let tmp = project();
    let setup = fs::read_to_string(tmp.path().join("setup.py")).unwrap();

    for args in [vec![], vec!["rebase"], vec!["rebase", "interactive", "extra"]] {
        make_level(tmp.path()).args(&args).assert().code(1);
    }

    assert_eq!(fs::read_to_string(tmp.path().join("setup.py")).unwrap(), setup);
    assert!(!tmp.path().join("gitgud/skills/rebase").exists());
}

#[test]
fn test_outside_project_root() {
    let tmp = tempfile::tempdir().unwrap();
    make_level(tmp.path())
        .args(["rebase", "interactive", "--yes"])
        .assert()
        .code(1)
        .stderr(contains("not found"));
}

#[test]
fn test_operator_abort() {
    let tmp = project();
    make_level(tmp.path())
        .args(["rebase", "interactive"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(contains("Aborting, no changes made."));

    assert!(!tmp.path().join("gitgud/skills/rebase").exists());
    assert!(!fs::read_to_string(tmp.path().join("setup.py"))
        .unwrap()
        .contains("rebase"));
}

#[test]
fn test_confirm_reprompts_then_runs() {
    let tmp = project();
    make_level(tmp.path())
        .args(["rebase", "interactive"])
        .write_stdin("sure\nY\n")
        .assert()
        .success()
        .stdout(contains("Confirm[y/n] Confirm[y/n] "))
        .stdout(contains("Done."));

    let level_dir = tmp.path().join("gitgud/skills/rebase/_interactive");
    for name in LEVEL_FILES {
        assert!(level_dir.join(name).is_file());
    }
}

#[test]
fn test_rerun_is_a_noop() {
    let tmp = project();
    make_level(tmp.path())
        .args(["--yes", "rebase", "interactive"])
        .assert()
        .success();

    let index = tmp.path().join("gitgud/skills/__init__.py");
    let module = tmp.path().join("gitgud/skills/rebase/__init__.py");
    let setup = tmp.path().join("setup.py");
    let before: Vec<String> = [&index, &module, &setup]
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert!(before[0].contains("AllSkills([\n    rebase_skill\n])"));

    make_level(tmp.path())
        .args(["--yes", "rebase", "interactive"])
        .assert()
        .success()
        .stdout(contains("Already registered level \"interactive\""));

    let after: Vec<String> = [&index, &module, &setup]
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_dry_run_skips_prompt_and_writes_nothing() {
    let tmp = project();
    make_level(tmp.path())
        .args(["--dry-run", "rebase", "interactive"])
        .assert()
        .success()
        .stdout(contains("Would register skill \"rebase\""))
        .stdout(contains("Dry run, nothing written."));

    assert!(!tmp.path().join("gitgud/skills/rebase").exists());
}

#[test]
fn test_package_from_local_config() {
    let tmp = project();
    fs::rename(tmp.path().join("gitgud"), tmp.path().join("mytool")).unwrap();
    fs::write(
        tmp.path().join("mytool/skills/__init__.py"),
        "\nfrom mytool.skills.util import AllSkills\n\nall_skills = AllSkills([\n])\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("levelgen.toml"),
        "[project]\npackage = \"mytool\"\n",
    )
    .unwrap();

    make_level(tmp.path())
        .args(["-y", "rebase", "interactive"])
        .assert()
        .success();

    let setup = fs::read_to_string(tmp.path().join("setup.py")).unwrap();
    assert!(setup.contains("'mytool.skills.rebase',"));
    assert!(tmp.path().join("mytool/skills/rebase/_interactive").is_dir());
}
