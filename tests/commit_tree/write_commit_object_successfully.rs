use crate::common::command::{
    init_repository_dir, mingit_commit_tree, nested_repository_dir, run_mingit_command, stdout_of,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

const ROOT_TREE: &str = "88484bd9e7919fa9b7dfeb008fb8f6c85743d171";
const INITIAL_COMMIT: &str = "932407c27d842fb7da1593e8740ea62d8100b8fb";
const IDENTITY: &str = "A U Thor <author@example.com> 1700000000 +0000";

#[rstest]
fn write_commit_object_successfully(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(nested_repository_dir.path(), &["write-tree"])
        .assert()
        .success();

    mingit_commit_tree(
        nested_repository_dir.path(),
        &[ROOT_TREE, "-m", "Initial commit"],
    )
    .assert()
    .success()
    .stdout(format!("{INITIAL_COMMIT}\n"));

    let expected = format!(
        "tree {ROOT_TREE}\nauthor {IDENTITY}\ncommitter {IDENTITY}\n\nInitial commit\n"
    );
    run_mingit_command(
        nested_repository_dir.path(),
        &["cat-file", "-p", INITIAL_COMMIT],
    )
    .assert()
    .success()
    .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn write_commit_with_parent(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(nested_repository_dir.path(), &["write-tree"])
        .assert()
        .success();
    let parent = stdout_of(mingit_commit_tree(
        nested_repository_dir.path(),
        &[ROOT_TREE, "-m", "Initial commit"],
    ))?;

    let child = stdout_of(mingit_commit_tree(
        nested_repository_dir.path(),
        &[ROOT_TREE, "-p", &parent, "-m", "Second commit"],
    ))?;

    let expected = format!(
        "tree {ROOT_TREE}\nparent {parent}\nauthor {IDENTITY}\ncommitter {IDENTITY}\n\nSecond commit\n"
    );
    run_mingit_command(nested_repository_dir.path(), &["cat-file", "-p", &child])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
    run_mingit_command(nested_repository_dir.path(), &["cat-file", "-t", &child])
        .assert()
        .success()
        .stdout("commit\n");

    Ok(())
}

#[rstest]
fn committer_identity_overrides_author(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = mingit_commit_tree(
        nested_repository_dir.path(),
        &[ROOT_TREE, "-m", "Initial commit"],
    );
    cmd.env("GIT_COMMITTER_NAME", "C O Mitter")
        .env("GIT_COMMITTER_EMAIL", "committer@example.com");
    let commit_oid = stdout_of(cmd)?;

    run_mingit_command(nested_repository_dir.path(), &["cat-file", "-p", &commit_oid])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("author {IDENTITY}\n")))
        .stdout(predicate::str::contains(
            "committer C O Mitter <committer@example.com> 1700000000 +0000\n",
        ));

    Ok(())
}

#[rstest]
fn commit_with_invalid_tree_sha_fails(init_repository_dir: TempDir) {
    mingit_commit_tree(init_repository_dir.path(), &["not-a-sha", "-m", "msg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id"));
}
