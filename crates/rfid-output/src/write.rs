use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::emit::CsvFile;
use crate::error::{OutputError, Result};
use crate::report::{ERROR_REPORT_FILENAME, WARNING_REPORT_FILENAME};

/// Write `files` into `dir`, creating it when needed. Existing files with
/// the same names are replaced.
///
/// A report left by an earlier run is removed when this run does not
/// produce it. Company files from earlier runs are left alone.
pub fn write_outputs(dir: &Path, files: &[CsvFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    remove_stale_reports(dir, files)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.filename);
        fs::write(&path, &file.bytes).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = file.bytes.len(), "file written");
        written.push(path);
    }
    Ok(written)
}

fn remove_stale_reports(dir: &Path, files: &[CsvFile]) -> Result<()> {
    for name in [ERROR_REPORT_FILENAME, WARNING_REPORT_FILENAME] {
        if files.iter().any(|file| file.filename == name) {
            continue;
        }
        let path = dir.join(name);
        match fs::remove_file(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "stale report removed"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(OutputError::Remove { path, source }),
        }
    }
    Ok(())
}
