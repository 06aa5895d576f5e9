//! # Command-Line Interface
//!
//! The `contacts` binary: a presentation layer over [`crate::service::Directory`].
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add` | Create a contact |
//! | `list` | Show every contact |
//! | `show` | Show one contact by phone |
//! | `update` | Change some fields of a contact |
//! | `delete` | Remove a contact |
//! | `path` | Print the contact file in use |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! contacts --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod contact;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
