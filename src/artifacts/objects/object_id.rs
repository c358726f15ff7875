//! Object identifier (SHA-1 hash)
//!
//! An object id has two encodings that must never be mixed up:
//!
//! - hex: 40 lowercase characters, used for storage keys, user facing output
//!   and the `tree`/`parent` lines of commits
//! - raw: 20 bytes, used only inside tree payloads
//!
//! Objects are stored in `objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::{ObjectError, ObjectResult};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// SHA-1 object id, kept in its validated hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate a 40 digit hex id. Upper case digits are accepted
    /// and normalized to lower case.
    pub fn try_parse(id: impl AsRef<str>) -> ObjectResult<Self> {
        let id = id.as_ref().trim();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash canonical object bytes.
    pub fn from_canonical(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        let hex = raw.iter().map(|byte| format!("{byte:02x}")).collect();
        Self(hex)
    }

    pub fn to_raw(&self) -> [u8; RAW_OBJECT_ID_LENGTH] {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];

        // the hex form is validated on construction
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&self.0[2 * i..2 * i + 2], 16).unwrap_or_default();
        }

        raw
    }

    /// Storage path relative to the objects root: `ab/cdef...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
