//! Error kinds surfaced by the object database
//!
//! Library code returns [`ObjectError`] so callers can tell a missing object
//! apart from a corrupt one or from a failing disk. Command handlers wrap it
//! with `anyhow` context; the original kind stays reachable through
//! `anyhow::Error::downcast_ref`.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// No stored file exists for the requested hash.
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    /// Stored bytes could not be decoded into a known object.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// Filesystem failure other than absence (permissions, disk full, ...).
    #[error("storage I/O error at {}: {source}", path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User supplied text is not a 40 digit hex object id.
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),
}

impl ObjectError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ObjectError::MalformedObject(reason.into())
    }

    pub fn storage_io(path: &Path, source: std::io::Error) -> Self {
        ObjectError::StorageIo {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
