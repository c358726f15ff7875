use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mingit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository holding `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn nested_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(root.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        root.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    init_repository_dir
}

pub fn run_mingit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mingit").expect("Failed to find mingit binary");
    cmd.env_remove("MINGIT_ROOT");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn mingit_commit_tree(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = run_mingit_command(dir, &["commit-tree"]);
    cmd.args(args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "A U Thor"),
        ("GIT_AUTHOR_EMAIL", "author@example.com"),
        ("GIT_AUTHOR_DATE", "2023-11-14 22:13:20 +0000"), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd.env_remove("GIT_COMMITTER_NAME");
    cmd.env_remove("GIT_COMMITTER_EMAIL");
    cmd.env_remove("GIT_COMMITTER_DATE");
    cmd
}

/// Run a command expected to succeed and return its trimmed stdout.
pub fn stdout_of(mut cmd: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?.trim_end().to_string())
}
