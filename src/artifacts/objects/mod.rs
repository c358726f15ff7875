//! Object types and their canonical encoding
//!
//! Every object is stored as `<kind> <size>\0<payload>`, hashed with SHA-1 and
//! zlib compressed at rest. Three kinds exist:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (modes, names and raw object ids)
//! - **Commit**: a tree snapshot with parent, authorship and message

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format, as embedded in trees
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
