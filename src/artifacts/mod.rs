//! Object model
//!
//! - `objects`: blob, tree and commit types with their canonical encoding

pub mod objects;
