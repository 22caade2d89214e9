//! Store Appender
//!
//! Sole writer of the store file. All connection handlers share one [`Store`]
//! handle; the append mutex guarantees that concurrent appends never
//! interleave within a record's bytes and are never lost.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{IngestError, Result};
use crate::record::Record;

/// Append-only record store
pub struct Store {
    /// Path of the store file (snapshot reads open it independently)
    path: PathBuf,

    /// Exclusive-append section: the open file handle
    file: Mutex<File>,
}

impl Store {
    /// Open or create the store file at the given path
    ///
    /// Parent directories are created as needed. The file is opened in
    /// append mode once, at startup; the handle lives for the process.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                IngestError::Store(format!("cannot open {}: {}", path.display(), e))
            })?;

        tracing::debug!("Store opened at {}", path.display());

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Append one record as a single terminated line
    ///
    /// The whole line is written and flushed under the append mutex. On
    /// failure the caller must not acknowledge success to the client.
    pub fn append(&self, record: &Record) -> Result<()> {
        let mut line = record.to_line();
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| {
                IngestError::Store(format!("append to {} failed: {}", self.path.display(), e))
            })
    }

    /// Path of the underlying store file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
