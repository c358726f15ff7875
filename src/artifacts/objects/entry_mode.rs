use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::ObjectError;

/// Mode of a tree entry.
///
/// The tree builder only ever writes `Regular` and `Directory`; `Executable`
/// exists so trees written by git itself can still be listed.
#[derive(Debug, Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub enum EntryMode {
    Regular,
    Executable,
    Directory,
}

impl EntryMode {
    /// Mode as written inside tree payloads (no zero padding).
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Executable => "100755",
            EntryMode::Directory => "40000",
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            EntryMode::Regular => 0o100644,
            EntryMode::Executable => 0o100755,
            EntryMode::Directory => 0o40000,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Kind of the object the entry points at.
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Directory => ObjectType::Tree,
            EntryMode::Regular | EntryMode::Executable => ObjectType::Blob,
        }
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "100644" => Ok(EntryMode::Regular),
            "100755" => Ok(EntryMode::Executable),
            "40000" | "040000" => Ok(EntryMode::Directory),
            _ => Err(ObjectError::malformed(format!(
                "unsupported tree entry mode {value:?}"
            ))),
        }
    }
}
