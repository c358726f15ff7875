//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `cat-file`: Print an object's payload, kind or size
//! - `hash-object`: Compute a blob id and optionally store the blob
//! - `ls-tree`: List the entries of a tree object
//! - `write-tree`: Snapshot a directory into tree objects
//! - `commit-tree`: Create a commit object for a tree

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
