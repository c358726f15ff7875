//! Porcelain commands
//!
//! - `init`: Create the repository scaffold

pub mod init;
