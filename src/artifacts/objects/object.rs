use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{ObjectError, ObjectResult};
use bytes::{BufMut, Bytes, BytesMut};

/// Produces the canonical bytes of an object: `<kind> <len>\0<payload>`
pub trait Packable {
    fn serialize(&self) -> ObjectResult<Bytes>;
}

/// Rebuilds an object from its payload (the header is already stripped).
pub trait Unpackable {
    fn deserialize(payload: Bytes) -> ObjectResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> ObjectResult<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::from_canonical(&content))
    }
}

/// Prefix `payload` with the canonical `<kind> <len>\0` header.
pub(crate) fn frame(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), payload.len());

    let mut object_bytes = BytesMut::with_capacity(header.len() + payload.len());
    object_bytes.put_slice(header.as_bytes());
    object_bytes.put_slice(payload);

    object_bytes.freeze()
}

/// A decoded but not yet interpreted object: its kind and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub object_type: ObjectType,
    pub payload: Bytes,
}

impl RawObject {
    /// Split canonical (already decompressed) bytes at the first NUL and
    /// validate the `<kind> <len>` header in front of it.
    pub fn parse(canonical: Bytes) -> ObjectResult<Self> {
        let header_end = canonical
            .iter()
            .position(|byte| *byte == 0)
            .ok_or_else(|| ObjectError::malformed("missing NUL after object header"))?;

        let header = std::str::from_utf8(&canonical[..header_end])
            .map_err(|_| ObjectError::malformed("object header is not valid UTF-8"))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| ObjectError::malformed(format!("invalid object header {header:?}")))?;

        let object_type = ObjectType::try_from(kind)?;
        let invalid_size = || ObjectError::malformed(format!("invalid object size {size:?}"));
        if size.is_empty() || !size.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid_size());
        }
        let size = size.parse::<usize>().map_err(|_| invalid_size())?;

        let payload = canonical.slice(header_end + 1..);
        if payload.len() != size {
            return Err(ObjectError::malformed(format!(
                "{object_type} declares {size} bytes but carries {}",
                payload.len()
            )));
        }

        Ok(RawObject {
            object_type,
            payload,
        })
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Tree(tree) => tree.object_type(),
            ObjectBox::Commit(commit) => commit.object_type(),
        }
    }
}

impl TryFrom<RawObject> for ObjectBox {
    type Error = ObjectError;

    fn try_from(raw: RawObject) -> Result<Self, Self::Error> {
        match raw.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(raw.payload)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(raw.payload)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                raw.payload,
            )?))),
        }
    }
}
