use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox, RawObject};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

/// What `cat-file` reports about an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Pretty-print the payload
    Pretty,
    /// Object kind
    Type,
    /// Payload size in bytes
    Size,
}

impl Repository {
    /// Load an object and return its kind and payload.
    pub fn read_object(&self, object_id: &ObjectId) -> anyhow::Result<RawObject> {
        self.database()
            .load(object_id)
            .with_context(|| format!("Unable to read object {object_id}"))
    }

    pub fn cat_file(&self, object_sha: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha)?;
        let raw = self.read_object(&object_id)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", raw.object_type)?,
            CatFileMode::Size => writeln!(self.writer(), "{}", raw.payload.len())?,
            CatFileMode::Pretty => match ObjectBox::try_from(raw)? {
                // blob bytes go out verbatim, binary included
                ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                ObjectBox::Tree(tree) => {
                    for entry in tree.entries() {
                        writeln!(self.writer(), "{}", entry.display())?;
                    }
                }
                ObjectBox::Commit(commit) => write!(self.writer(), "{}", commit.display())?,
            },
        }

        Ok(())
    }
}
