//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PlannerError;

/// Read a whole text file, returning an error if the file doesn't exist
pub fn read_text_required<P: AsRef<Path>>(path: P) -> Result<String, PlannerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PlannerError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| PlannerError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Temporary sibling used while writing `path`
pub fn temp_path_for(path: &Path) -> Result<PathBuf, PlannerError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| PlannerError::Io(format!("Not a file path: {}", path.display())))?;

    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely written or left as it was. The parent
/// directory must already exist.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), PlannerError> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path).map_err(|e| {
        PlannerError::Io(format!("Failed to open {} for writing: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(PlannerError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PlannerError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
