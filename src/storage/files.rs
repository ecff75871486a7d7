//! Line-oriented record files
//!
//! Whole-file read and write primitives. Writes go through a temporary file
//! in the target directory that is renamed over the target, so readers only
//! ever see the old or the new content.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::logging::log_storage_operation;

/// A record file holding one record per line
#[derive(Debug, Clone)]
pub struct LineFile {
    path: PathBuf,
}

impl LineFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all lines. A missing file reads as empty.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log_storage_operation("read", &self.path.to_string_lossy(), 0, true);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.failed("read", e)),
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| self.failed("read", e))?;

        log_storage_operation("read", &self.path.to_string_lossy(), lines.len(), true);
        Ok(lines)
    }

    /// Replace the file content with `lines`, creating the directory if needed
    pub fn write_lines<I, S>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let count = self.write_atomically(lines).map_err(|e| self.failed("write", e))?;
        log_storage_operation("write", &self.path.to_string_lossy(), count, true);
        Ok(count)
    }

    fn write_atomically<I, S>(&self, lines: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        let mut count = 0;
        {
            let mut writer = io::BufWriter::new(temp.as_file_mut());
            for line in lines {
                writeln!(writer, "{}", line.as_ref())?;
                count += 1;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        Ok(count)
    }

    fn failed(&self, operation: &str, source: io::Error) -> EventDeskError {
        log_storage_operation(operation, &self.path.to_string_lossy(), 0, false);
        EventDeskError::persistence(&self.path, source)
    }
}
