//! A minimal content addressable object store in the format of git's object
//! database: blobs, trees and commits, SHA-1 addressed and zlib compressed.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
