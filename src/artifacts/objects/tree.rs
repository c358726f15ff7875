//! Tree object
//!
//! Trees describe one directory level: a list of named entries, each pointing
//! at a blob (file) or another tree (subdirectory).
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! The tree hash depends on entry order. [`Tree`] writes entries in exactly the
//! order it was given; producing a sorted list is the tree builder's job.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, ObjectResult};
use bytes::{BufMut, Bytes, BytesMut};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    /// `ls-tree` style line: `<mode> <kind> <oid>\t<name>`
    pub fn display(&self) -> String {
        format!(
            "{:06o} {} {}\t{}",
            self.mode.as_u32(),
            self.mode.object_type(),
            self.oid,
            self.name
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    /// Tree payload without the object header.
    pub fn payload(&self) -> Bytes {
        let mut payload = BytesMut::new();

        for entry in &self.entries {
            payload.put_slice(entry.mode.as_str().as_bytes());
            payload.put_u8(b' ');
            payload.put_slice(entry.name.as_bytes());
            payload.put_u8(0);
            payload.put_slice(&entry.oid.to_raw());
        }

        payload.freeze()
    }
}

/// Scan a tree payload: `<mode> <name>\0` followed by exactly 20 raw bytes,
/// repeated until the payload is exhausted.
pub fn decode_tree_entries(payload: &[u8]) -> ObjectResult<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    let mut rest = payload;

    while !rest.is_empty() {
        let field_end = rest
            .iter()
            .position(|byte| *byte == 0)
            .ok_or_else(|| ObjectError::malformed("unexpected end of tree entry header"))?;

        let field = std::str::from_utf8(&rest[..field_end])
            .map_err(|_| ObjectError::malformed("tree entry name is not valid UTF-8"))?;
        let (mode, name) = field
            .split_once(' ')
            .ok_or_else(|| ObjectError::malformed(format!("invalid tree entry {field:?}")))?;

        let oid_start = field_end + 1;
        let oid_end = oid_start + RAW_OBJECT_ID_LENGTH;
        let raw: &[u8; RAW_OBJECT_ID_LENGTH] = rest
            .get(oid_start..oid_end)
            .and_then(|raw| raw.try_into().ok())
            .ok_or_else(|| ObjectError::malformed(format!("truncated object id for {name:?}")))?;

        entries.push(TreeEntry::new(
            EntryMode::try_from(mode)?,
            name.to_string(),
            ObjectId::from_raw(raw),
        ));

        rest = &rest[oid_end..];
    }

    Ok(entries)
}

impl Packable for Tree {
    fn serialize(&self) -> ObjectResult<Bytes> {
        Ok(frame(self.object_type(), &self.payload()))
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: Bytes) -> ObjectResult<Self> {
        Ok(Self::new(decode_tree_entries(&payload)?))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(TreeEntry::display)
            .collect::<Vec<String>>()
            .join("\n")
    }
}
