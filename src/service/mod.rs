//! Use-case layer
//!
//! Validation and CRUD orchestration on top of the storage layer.

mod directory;

pub use directory::{Directory, DirectoryError, DirectoryResult};
