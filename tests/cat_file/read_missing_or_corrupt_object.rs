use crate::common::command::{init_repository_dir, repository_dir, run_mingit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

const MISSING_OID: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

#[rstest]
fn reading_a_missing_object_fails(init_repository_dir: TempDir) {
    run_mingit_command(init_repository_dir.path(), &["cat-file", "-p", MISSING_OID])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("object {MISSING_OID} not found")));
}

#[rstest]
fn reading_a_corrupt_object_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let object_dir = init_repository_dir.path().join(".git/objects/e6");
    std::fs::create_dir_all(&object_dir)?;
    std::fs::write(
        object_dir.join("9de29bb2d1d6434b8b29ae775ad8c2e48c5391"),
        b"definitely not zlib",
    )?;

    run_mingit_command(init_repository_dir.path(), &["cat-file", "-p", MISSING_OID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed object"));

    Ok(())
}

#[rstest]
#[case("abc")]
#[case("zz9de29bb2d1d6434b8b29ae775ad8c2e48c5391")]
fn reading_an_invalid_sha_fails(init_repository_dir: TempDir, #[case] sha: &str) {
    run_mingit_command(init_repository_dir.path(), &["cat-file", "-p", sha])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id"));
}

#[rstest]
fn missing_root_fails_without_being_created(repository_dir: TempDir) {
    let missing_root = repository_dir.path().join("missing");

    run_mingit_command(repository_dir.path(), &["--root", "missing", "cat-file", "-p", MISSING_OID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to resolve repository path"));

    assert!(!missing_root.exists());
}
