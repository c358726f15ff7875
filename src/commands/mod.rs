//! Command implementations
//!
//! Each command is an `impl Repository` block. They are split the way git
//! splits its own:
//!
//! - `plumbing`: direct object manipulation (cat-file, hash-object, ls-tree,
//!   write-tree, commit-tree)
//! - `porcelain`: repository setup (init)

pub mod plumbing;
pub mod porcelain;
