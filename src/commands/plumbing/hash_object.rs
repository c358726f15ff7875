use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ObjectResult;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Hash file content as a blob, storing it when `persist` is set.
    pub fn write_blob(&self, content: Bytes, persist: bool) -> ObjectResult<ObjectId> {
        let blob = Blob::new(content);

        if persist {
            self.database().store(&blob)
        } else {
            blob.object_id()
        }
    }

    pub async fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        let content = self
            .workspace()
            .read_file(object_path)
            .await
            .with_context(|| format!("Unable to read {}", object_path.display()))?;

        let object_id = self.write_blob(content, write)?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
