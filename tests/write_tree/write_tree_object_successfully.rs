use crate::common::command::{
    init_repository_dir, nested_repository_dir, repository_dir, run_mingit_command, stdout_of,
};
use crate::common::file::stored_objects;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::rstest;

#[rstest]
fn write_tree_object_successfully(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(nested_repository_dir.path(), &["write-tree"])
        .assert()
        .success()
        .stdout("88484bd9e7919fa9b7dfeb008fb8f6c85743d171\n");

    // three blobs, two subtrees and the root tree
    pretty_assertions::assert_eq!(stored_objects(nested_repository_dir.path()).len(), 6);

    Ok(())
}

#[rstest]
fn write_tree_of_a_subdirectory(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(nested_repository_dir.path(), &["write-tree", "a/b"])
        .assert()
        .success()
        .stdout("d864f7793fd2952c217c27d3780442f8943c8663\n");

    Ok(())
}

#[rstest]
fn write_tree_twice_is_idempotent(
    nested_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = stdout_of(run_mingit_command(nested_repository_dir.path(), &["write-tree"]))?;
    let objects = stored_objects(nested_repository_dir.path()).len();
    let second = stdout_of(run_mingit_command(nested_repository_dir.path(), &["write-tree"]))?;

    pretty_assertions::assert_eq!(first, second);
    pretty_assertions::assert_eq!(stored_objects(nested_repository_dir.path()).len(), objects);

    Ok(())
}

#[rstest]
fn creation_order_does_not_change_the_tree(
    #[from(init_repository_dir)] first: TempDir,
    #[from(init_repository_dir)] second: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["b.txt", "a.txt", "c"] {
        first.child(name).write_str(name)?;
    }
    for name in ["c", "a.txt", "b.txt"] {
        second.child(name).write_str(name)?;
    }

    let first_oid = stdout_of(run_mingit_command(first.path(), &["write-tree"]))?;
    let second_oid = stdout_of(run_mingit_command(second.path(), &["write-tree"]))?;

    pretty_assertions::assert_eq!(first_oid, second_oid);

    Ok(())
}

#[rstest]
fn empty_repository_writes_the_empty_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(init_repository_dir.path(), &["write-tree"])
        .assert()
        .success()
        .stdout("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n");

    Ok(())
}

#[rstest]
fn write_tree_of_a_missing_directory_fails(repository_dir: TempDir) {
    run_mingit_command(repository_dir.path(), &["write-tree", "missing"])
        .assert()
        .failure();
}

#[rstest]
fn write_tree_of_a_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository_dir.child("a.txt").write_str("hi")?;

    run_mingit_command(init_repository_dir.path(), &["write-tree", "a.txt"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a directory"));

    assert!(stored_objects(init_repository_dir.path()).is_empty());

    Ok(())
}
