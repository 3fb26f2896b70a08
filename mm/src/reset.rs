//! Output directory reset

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::DeleteError;

/// Outcome of clearing the output directory
#[derive(Debug, Default)]
pub struct ResetReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<DeleteError>,
}

/// Delete every regular file directly inside `dir`.
///
/// Sub-directories and their contents are left alone; a symlink to a file
/// counts as a file. A missing or unreadable directory is not an error, and a
/// file that cannot be deleted is logged and skipped.
pub fn clear_output_dir(dir: &Path) -> ResetReport {
    clear_output_dir_with(dir, |path| fs::remove_file(path))
}

/// Same as [`clear_output_dir`] with a custom removal function
pub fn clear_output_dir_with<F>(dir: &Path, mut remove: F) -> ResetReport
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut report = ResetReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Not clearing {}: {}", dir.display(), e);
            return report;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match remove(&path) {
            Ok(()) => {
                info!("Deleted file: {}", entry.file_name().to_string_lossy());
                report.deleted.push(path);
            }
            Err(source) => {
                let err = DeleteError { path, source };
                error!("{}: {}", err, err.source);
                report.failed.push(err);
            }
        }
    }

    report
}
