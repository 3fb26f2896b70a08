//! Output file writer

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WriteError;

/// Path of the output file for a record id: `<dir>/template-<id>.txt`
pub fn output_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("template-{}.txt", id))
}

/// Write `text` to the output file for `id`, replacing any existing file
pub fn write_output(dir: &Path, id: &str, text: &str) -> Result<PathBuf, WriteError> {
    let path = output_path(dir, id);
    match fs::write(&path, text) {
        Ok(()) => Ok(path),
        Err(source) => Err(WriteError { path, source }),
    }
}
