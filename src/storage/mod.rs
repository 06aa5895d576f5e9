//! # Storage Layer
//!
//! Persistence for the contact book.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Contacts | `name,phone,email` per line | `contacts.txt` (configurable) |
//! | Config | TOML | `~/.config/contacts/config.toml` or `--config` |
//!
//! ## Write Discipline
//!
//! - [`ContactStore`] always reads and rewrites the whole file
//! - Reads take a shared `fs2` lock, writes an exclusive one
//! - Writes go to a temp file first and are renamed into place
//!
//! ## Key Types
//!
//! - [`ContactStore`] - Read/write the contact file
//! - [`Config`] - Store location and behavior

mod config;
mod flatfile;

pub use config::{Config, ConfigError, OutputFormat, DEFAULT_STORE_FILE};
pub use flatfile::{ContactStore, MalformedLines, StoreError};
