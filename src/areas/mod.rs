//! Repository components
//!
//! - `database`: content addressed object store under `.git/objects`
//! - `repository`: the handle every command runs against
//! - `workspace`: read-only view of the working directory

pub mod database;
pub mod repository;
pub mod workspace;
