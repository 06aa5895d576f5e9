//! Contact Book - a flat-file contact directory
//!
//! Contacts (name, phone, email) live in a single text file, one record per
//! line. The phone number is the record's identity. Every mutation reads the
//! whole file, validates, and rewrites it.

pub mod domain;
pub mod storage;
pub mod service;
pub mod cli;

pub use domain::Contact;
pub use service::{Directory, DirectoryError};
pub use storage::{Config, ContactStore, MalformedLines, StoreError};
