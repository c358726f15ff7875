use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_NAMES: [&str; 1] = [".git"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a workspace directory.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the immediate children of `dir_path` (the workspace root when
    /// `None`), in filesystem order.
    ///
    /// The repository metadata directory is left out, and so is anything that
    /// is neither a regular file nor a directory. Symlinks are not followed.
    pub fn list_dir(&self, dir_path: Option<&Path>) -> ObjectResult<Vec<WorkspaceEntry>> {
        let dir_path = dir_path.unwrap_or(self.path());
        let metadata =
            std::fs::metadata(dir_path).map_err(|err| ObjectError::storage_io(dir_path, err))?;
        if !metadata.is_dir() {
            return Err(ObjectError::storage_io(
                dir_path,
                std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(dir_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(dir_path).to_path_buf();
                ObjectError::storage_io(&path, err.into())
            })?;

            let name = entry.file_name().to_str().ok_or_else(|| {
                ObjectError::storage_io(
                    entry.path(),
                    std::io::Error::new(std::io::ErrorKind::InvalidData, "file name is not UTF-8"),
                )
            })?;

            if IGNORED_NAMES.contains(&name) {
                continue;
            }

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                log::info!("skipping special file {}", entry.path().display());
                continue;
            };

            entries.push(WorkspaceEntry::new(
                name.to_string(),
                entry.path().to_path_buf(),
                kind,
            ));
        }

        Ok(entries)
    }

    /// Read a file relative to the workspace root (absolute paths pass
    /// through unchanged).
    pub async fn read_file(&self, file_path: &Path) -> ObjectResult<Bytes> {
        let file_path = self.path.join(file_path);

        tokio::fs::read(&file_path)
            .await
            .map(Bytes::from)
            .map_err(|err| ObjectError::storage_io(&file_path, err))
    }
}
