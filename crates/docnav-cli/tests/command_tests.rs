// Rust guideline compliant 2026-02-06

//! Integration tests for CLI commands.

use docnav_cli::commands::{hooks, init, run};
use docnav_core::{Config, FileStatus};
use git2::Repository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a README with three linked pages, one of them missing.
fn setup_docs(root: &Path) {
    fs::write(
        root.join("README.md"),
        "# Guide\n\n1. [Intro](docs/intro.md)\n2. [Usage](docs/usage.md)\n3. [FAQ](docs/faq.md)\n",
    )
    .expect("Failed to write README");
    fs::create_dir(root.join("docs")).expect("Failed to create docs dir");
    fs::write(root.join("docs/intro.md"), "# Intro\n").expect("Failed to write intro");
    fs::write(root.join("docs/usage.md"), "# Usage\n").expect("Failed to write usage");
}

#[test]
fn test_run_writes_navigation_and_progress() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_docs(temp_dir.path());

    let mut out = Vec::new();
    let report = run::execute_to(
        temp_dir.path(),
        &Config::default(),
        &run::RunArgs::default(),
        &mut out,
    )
    .expect("Run failed");

    let output = String::from_utf8(out).expect("Output is not UTF-8");
    assert_eq!(
        output,
        "Updated docs/intro.md\nUpdated docs/usage.md\nWarning: docs/faq.md not found\n"
    );
    assert_eq!(report.paths_with(FileStatus::Missing), vec!["docs/faq.md"]);

    let usage = fs::read_to_string(temp_dir.path().join("docs/usage.md")).expect("Failed to read");
    assert!(usage.contains("[← Previous: Intro](intro.md) | [Next: Faq →](faq.md)"));
}

#[test]
fn test_run_check_fails_until_updated() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_docs(temp_dir.path());
    let config = Config::default();
    let check = run::RunArgs {
        check: true,
        ..run::RunArgs::default()
    };

    let mut out = Vec::new();
    let result = run::execute_to(temp_dir.path(), &config, &check, &mut out);
    assert!(result.is_err(), "Check should fail on stale navigation");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("docs/intro.md")).expect("Failed to read"),
        "# Intro\n"
    );

    run::execute_to(temp_dir.path(), &config, &run::RunArgs::default(), &mut Vec::new())
        .expect("Run failed");
    run::execute_to(temp_dir.path(), &config, &check, &mut Vec::new())
        .expect("Check should pass after update");
}

#[test]
fn test_run_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_docs(temp_dir.path());

    let args = run::RunArgs {
        json: true,
        ..run::RunArgs::default()
    };
    let mut out = Vec::new();
    run::execute_to(temp_dir.path(), &Config::default(), &args, &mut out).expect("Run failed");

    let output = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(!output.contains("Updated docs/intro.md"));
    assert!(output.contains("\"status\": \"missing\""));
    assert!(output.contains("\"path\": \"docs/intro.md\""));
}

#[test]
fn test_run_index_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_docs(temp_dir.path());
    fs::write(
        temp_dir.path().join("ORDER.md"),
        "[Usage](docs/usage.md) [Intro](docs/intro.md)",
    )
    .expect("Failed to write index");

    let args = run::RunArgs {
        index: Some("ORDER.md".into()),
        ..run::RunArgs::default()
    };
    run::execute_to(temp_dir.path(), &Config::default(), &args, &mut Vec::new())
        .expect("Run failed");

    let intro = fs::read_to_string(temp_dir.path().join("docs/intro.md")).expect("Failed to read");
    assert!(intro.contains("[← Previous: Usage](usage.md)"));
}

#[test]
fn test_hooks_pre_commit() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_docs(temp_dir.path());

    hooks::execute(temp_dir.path(), &Config::default(), hooks::HookAction::PreCommit)
        .expect("Hook failed");

    let intro = fs::read_to_string(temp_dir.path().join("docs/intro.md")).expect("Failed to read");
    assert!(intro.contains("[Next: Usage →](usage.md)"));
}

#[test]
fn test_init_installs_hook_and_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Repository::init(temp_dir.path()).expect("Failed to init git repo");

    let install = init::execute(temp_dir.path()).expect("Init failed");
    assert_eq!(install, init::HookInstall::Created);

    assert!(temp_dir.path().join(".docnav.toml").exists());
    let hook_path = temp_dir.path().join(".git/hooks/pre-commit");
    let hook = fs::read_to_string(&hook_path).expect("Failed to read hook");
    assert_eq!(hook, format!("#!/bin/sh\n{}\n", init::HOOK_COMMAND));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook_path).expect("No metadata").permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "Hook should be executable");
    }

    let again = init::execute(temp_dir.path()).expect("Second init failed");
    assert_eq!(again, init::HookInstall::AlreadyPresent);
}

#[test]
fn test_init_appends_to_existing_hook() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Repository::init(temp_dir.path()).expect("Failed to init git repo");
    let hook_path = temp_dir.path().join(".git/hooks/pre-commit");
    fs::create_dir_all(hook_path.parent().expect("No parent")).expect("Failed to create hooks dir");
    fs::write(&hook_path, "#!/bin/sh\ncargo fmt --check").expect("Failed to write hook");

    let install = init::execute(temp_dir.path()).expect("Init failed");
    assert_eq!(install, init::HookInstall::Appended);

    let hook = fs::read_to_string(&hook_path).expect("Failed to read hook");
    assert_eq!(hook, "#!/bin/sh\ncargo fmt --check\ndocnav hooks pre-commit\n");
}

#[test]
fn test_init_outside_git_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    if Repository::discover(temp_dir.path()).is_ok() {
        // The temp directory lives inside some enclosing repository.
        return;
    }
    assert!(init::execute(temp_dir.path()).is_err());
    assert!(
        !temp_dir.path().join(".docnav.toml").exists(),
        "Failed init should not leave a config file behind"
    );
}
