// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tag_release(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tag-release"))
        .args(args)
        .current_dir(cwd)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", cwd.join("gitconfig"))
        .env("GIT_AUTHOR_NAME", "Release Bot")
        .env("GIT_AUTHOR_EMAIL", "release@example.com")
        .env("GIT_COMMITTER_NAME", "Release Bot")
        .env("GIT_COMMITTER_EMAIL", "release@example.com")
        .output()
        .expect("Failed to execute tag-release")
}

fn git(cwd: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", cwd.join("gitconfig"))
        .env("GIT_AUTHOR_NAME", "Release Bot")
        .env("GIT_AUTHOR_EMAIL", "release@example.com")
        .env("GIT_COMMITTER_NAME", "Release Bot")
        .env("GIT_COMMITTER_EMAIL", "release@example.com")
        .output()
        .expect("Failed to execute git")
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = tag_release(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tag-release"));
    assert!(stdout.contains("pre-releases/"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    let output = tag_release(dir.path(), &["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_missing_version_is_usage_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{\"version\": \"1.0.0\"}").unwrap();

    let output = tag_release(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: tag-release"), "stderr: {}", stderr);
}

#[test]
fn test_extra_arguments_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let output = tag_release(dir.path(), &["1.0.0", "2.0.0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_manifest_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("absent").join("package.json");

    let output = tag_release(
        dir.path(),
        &["--manifest", manifest.to_str().unwrap(), "3.0.0a6"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Converted PEP 440 -> semver: 3.0.0a6 -> 3.0.0-alpha.6"));
    assert!(stdout.contains("pre-releases/3.0.0-alpha.6"));
    assert!(stderr.contains("Manifest not found"), "stderr: {}", stderr);
}

#[test]
fn test_dry_run_prints_plan() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{\"version\": \"1.0.0\"}\n").unwrap();

    let output = tag_release(dir.path(), &["--dry-run", "3.0.0rc1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("git tag pre-releases/3.0.0-rc.1"));
    assert!(stdout.contains("git push origin pre-releases/3.0.0-rc.1"));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        "{\"version\": \"1.0.0\"}\n"
    );
}

#[test]
fn test_relative_manifest_flag_is_relative_to_current_directory() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    let ui = dir.path().join("ui");
    fs::create_dir(&ui).unwrap();
    fs::write(dir.path().join("package.json"), "{\"version\": \"0.1.0\"}\n").unwrap();
    fs::write(ui.join("package.json"), "{\"version\": \"1.0.0\"}\n").unwrap();

    let output = tag_release(&ui, &["--dry-run", "-m", "package.json", "2.0.0"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let add_line = stdout
        .lines()
        .find(|line| line.contains("git add"))
        .unwrap_or_default();
    assert!(add_line.ends_with("ui/package.json"), "stdout: {}", stdout);
}

#[test]
fn test_release_against_bare_remote() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let dir = TempDir::new().unwrap();
    let origin = dir.path().join("origin.git");
    let work = dir.path().join("work");
    fs::create_dir(&work).unwrap();

    assert!(git(dir.path(), &["init", "--bare", origin.to_str().unwrap()]).status.success());
    assert!(git(&work, &["init"]).status.success());
    fs::write(
        work.join("package.json"),
        "{\n  \"name\": \"demo\",\n  \"version\": \"0.0.0\"\n}\n",
    )
    .unwrap();
    assert!(git(&work, &["add", "package.json"]).status.success());
    assert!(git(&work, &["commit", "-m", "initial"]).status.success());
    assert!(git(&work, &["remote", "add", "origin", origin.to_str().unwrap()])
        .status
        .success());

    let output = tag_release(&work, &["3.0.0b1"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tagged and pushed pre-releases/3.0.0-beta.1"));

    let remote_tags = git(&work, &["ls-remote", "--tags", "origin"]);
    assert!(String::from_utf8_lossy(&remote_tags.stdout).contains("refs/tags/pre-releases/3.0.0-beta.1"));

    let log = git(&work, &["log", "-1", "--format=%s"]);
    assert_eq!(
        String::from_utf8_lossy(&log.stdout).trim(),
        "Finalize version: 3.0.0-beta.1"
    );
}

#[test]
fn test_failing_git_exits_with_one() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    // A repository without an "origin" remote: commit and tag succeed, push fails
    let dir = TempDir::new().unwrap();
    assert!(git(dir.path(), &["init"]).status.success());
    fs::write(dir.path().join("package.json"), "{\"version\": \"0.0.0\"}\n").unwrap();

    let output = tag_release(dir.path(), &["1.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("git push origin HEAD"), "stderr: {}", stderr);

    let tags = git(dir.path(), &["tag", "--list"]);
    assert!(String::from_utf8_lossy(&tags.stdout).contains("releases/1.0.0"));
}
