//! Flat-file storage for contacts
//!
//! All contacts live in one UTF-8 text file, one `name,phone,email` line per
//! record. The file is always read and rewritten whole; there is no
//! incremental write path.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Contact;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on contact store {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record at line {line} of {}", path.display())]
    Malformed { path: PathBuf, line: usize },
}

/// What `load_all` does with a line that is not exactly three fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLines {
    /// Drop the line and keep loading
    #[default]
    Skip,
    /// Fail the load with [`StoreError::Malformed`]
    Reject,
}

/// Store for contact data in a single flat file
pub struct ContactStore {
    path: PathBuf,
    malformed: MalformedLines,
}

impl ContactStore {
    /// Creates a store bound to the given file, skipping malformed lines
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            malformed: MalformedLines::Skip,
        }
    }

    /// Sets the malformed-line policy
    pub fn with_malformed_lines(mut self, malformed: MalformedLines) -> Self {
        self.malformed = malformed;
        self
    }

    /// Returns the path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Creates the backing file empty if it does not exist yet
    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        debug!("created empty contact store at {}", self.path.display());
        Ok(())
    }

    /// Reads every contact in file order
    pub fn load_all(&self) -> Result<Vec<Contact>, StoreError> {
        self.ensure_exists()?;

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;

        // Acquire shared lock for reading
        file.lock_shared().map_err(|e| self.io_error(e))?;

        let reader = BufReader::new(&file);
        let mut contacts = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;

            if line.trim().is_empty() {
                continue;
            }

            match Contact::parse_line(&line) {
                Some(contact) => contacts.push(contact),
                None => match self.malformed {
                    MalformedLines::Skip => {
                        warn!(
                            "skipping malformed line {} in {}",
                            idx + 1,
                            self.path.display()
                        );
                    }
                    MalformedLines::Reject => {
                        return Err(StoreError::Malformed {
                            path: self.path.clone(),
                            line: idx + 1,
                        });
                    }
                },
            }
        }

        // Lock is released when file is dropped
        debug!("loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    /// Replaces the backing file with exactly `contacts`, in order
    pub fn save_all(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp_path = self.temp_path();

        if let Err(e) = self.write_lines(&temp_path, contacts) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(e));
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(e));
        }

        debug!("saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn write_lines(&self, temp_path: &Path, contacts: &[Contact]) -> io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;

        // Acquire exclusive lock
        file.lock_exclusive()?;

        let mut writer = BufWriter::new(&file);
        for contact in contacts {
            writeln!(writer, "{}", contact.to_line())?;
        }
        writer.flush()?;
        file.sync_all()
    }
}
