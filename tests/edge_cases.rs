//! Edge case and error handling tests for dent


use assert_cmd::Command;
use harness::{TestDir, run_dent};
use predicates::prelude::*;

// ============================================================================
// Empty and dotfile-only directories
// ============================================================================

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_dent(dir.path(), &[]);
    assert!(success, "empty directory is not an error");
    assert!(stdout.is_empty(), "no entries to print: {}", stdout);
    assert!(stderr.is_empty());
}

#[test]
fn test_empty_directory_with_show_all_prints_dot_dirs() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_dent(dir.path(), &["-a"]);
    assert!(success);
    assert_eq!(stdout, ".\n..\n");
}

#[test]
fn test_empty_directory_unordered_prints_nothing() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_dent(dir.path(), &["-u"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_dotfiles_only_directory_prints_nothing_with_no_dotfiles() {
    let dir = TestDir::with_entries(&[".one", ".two"]);

    let (stdout, _stderr, success) = run_dent(dir.path(), &["-n"]);
    assert!(success);
    assert!(stdout.is_empty());
}

// ============================================================================
// Name oddities
// ============================================================================

#[test]
fn test_mixed_case_names_sort_folded() {
    let dir = TestDir::with_entries(&["README", "readme.bak", "zzz", "Readme.old"]);

    let (stdout, _stderr, success) = run_dent(dir.path(), &[]);
    assert!(success);

    // The full listing must be non-decreasing under case folding, whatever
    // order the unstable sort picks for case-only ties.
    let lines: Vec<String> = stdout.lines().map(|l| l.to_lowercase()).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "output not case-insensitively sorted: {}", stdout);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_names_with_spaces_print_verbatim() {
    let dir = TestDir::with_entries(&["two words", "one"]);

    let (stdout, _stderr, success) = run_dent(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "one\ntwo words\n");
}

#[test]
fn test_non_ascii_names_are_printed() {
    let dir = TestDir::with_entries(&["ärger", "apple"]);

    let (stdout, _stderr, success) = run_dent(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("ärger"), "should print the name: {}", stdout);
    assert!(stdout.contains("apple"));
}

#[test]
fn test_triple_dot_is_not_a_dot_dir() {
    let dir = TestDir::with_entries(&["..."]);

    // `...` is an ordinary dotfile: hidden by -n, shown by default.
    let (stdout, _stderr, success) = run_dent(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "...\n");

    let (stdout, _stderr, _) = run_dent(dir.path(), &["-n"]);
    assert!(stdout.is_empty());
}

// ============================================================================
// Error reporting (exit status and streams)
// ============================================================================

#[test]
fn test_open_error_reports_on_stderr_only() {
    let dir = TestDir::new();

    Command::cargo_bin("dent")
        .unwrap()
        .arg("definitely_missing")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("definitely_missing"));
}

#[test]
fn test_file_as_directory_argument_fails() {
    let dir = TestDir::new();
    dir.add_file("plain_file", "not a directory");

    Command::cargo_bin("dent")
        .unwrap()
        .arg("plain_file")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("plain_file"));
}

#[test]
fn test_usage_error_mentions_all_flags() {
    let dir = TestDir::new();

    Command::cargo_bin("dent")
        .unwrap()
        .args([".", "extra"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[-ahnu] [directory_name]"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_fails() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    let locked = dir.add_dir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to chmod");

    let (stdout, stderr, success) = run_dent(dir.path(), &["locked"]);

    // Restore so TempDir cleanup can remove it.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    if success {
        // Running as root: permission bits are not enforced.
        return;
    }
    assert!(stdout.is_empty());
    assert!(stderr.contains("locked"), "should name the path: {}", stderr);
}
