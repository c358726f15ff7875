use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, RawObject, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Content addressed object store rooted at an `objects` directory.
///
/// Objects live at `objects/<2 hex chars>/<38 hex chars>`, zlib compressed.
/// Files are created once and never modified.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Serialize, hash and persist an object, returning its id.
    pub fn store(&self, object: &impl Object) -> ObjectResult<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = ObjectId::from_canonical(&object_content);

        self.put(&object_content, &object_id)?;

        Ok(object_id)
    }

    /// Persist canonical bytes under `object_id`.
    ///
    /// An object that is already present is left alone: equal ids mean equal
    /// bytes.
    pub fn put(&self, object_content: &[u8], object_id: &ObjectId) -> ObjectResult<()> {
        let object_path = self.object_path(object_id);

        if object_path.exists() {
            log::debug!("object {object_id} already present, skipping write");
            return Ok(());
        }

        let object_dir = object_path.parent().unwrap_or(self.objects_path());
        std::fs::create_dir_all(object_dir)
            .map_err(|err| ObjectError::storage_io(object_dir, err))?;

        log::debug!("writing object {object_id} ({} bytes)", object_content.len());
        let compressed =
            Self::compress(object_content).map_err(|err| ObjectError::storage_io(&object_path, err))?;
        self.write_object(&object_path, &compressed)
    }

    /// Compressed bytes stored for `object_id`.
    pub fn get(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ObjectError::ObjectNotFound(object_id.clone()))
            }
            Err(err) => Err(ObjectError::storage_io(&object_path, err)),
        }
    }

    /// Read and decode the object stored under `object_id`.
    pub fn load(&self, object_id: &ObjectId) -> ObjectResult<RawObject> {
        log::debug!("loading object {object_id}");
        Self::decode(&self.get(object_id)?)
    }

    /// Decompress stored bytes and split them into kind and payload.
    pub fn decode(compressed: &[u8]) -> ObjectResult<RawObject> {
        RawObject::parse(Self::decompress(compressed)?)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> ObjectResult<ObjectBox> {
        ObjectBox::try_from(self.load(object_id)?)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> ObjectResult<Option<Tree>> {
        let raw = self.load(object_id)?;

        match raw.object_type {
            ObjectType::Tree => Ok(Some(Tree::deserialize(raw.payload)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> ObjectResult<Option<Commit>> {
        let raw = self.load(object_id)?;

        match raw.object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(raw.payload)?)),
            _ => Ok(None),
        }
    }

    fn write_object(&self, object_path: &Path, object_content: &[u8]) -> ObjectResult<()> {
        let object_dir = object_path.parent().unwrap_or(self.objects_path());
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .map_err(|err| ObjectError::storage_io(&temp_object_path, err))?;

        if let Err(err) = file.write_all(object_content) {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(ObjectError::storage_io(&temp_object_path, err));
        }

        // rename the temp file into place so readers never see a partial object
        match std::fs::rename(&temp_object_path, object_path) {
            Ok(()) => Ok(()),
            Err(err) => {
                let _ = std::fs::remove_file(&temp_object_path);
                // a concurrent writer got there first with identical bytes
                if object_path.is_file() {
                    Ok(())
                } else {
                    Err(ObjectError::storage_io(object_path, err))
                }
            }
        }
    }

    fn compress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        encoder.finish().map(Bytes::from)
    }

    fn decompress(data: &[u8]) -> ObjectResult<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|err| ObjectError::malformed(format!("unable to decompress object: {err}")))?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}-{}", std::process::id(), rand::random::<u32>())
    }
}
