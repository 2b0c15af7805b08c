use crate::error::{BrollyError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the names of all direct entries of `dir`, files and directories alike.
///
/// Order is whatever the platform's directory enumeration returns - callers
/// wanting determinism must sort. Entry names that are not valid UTF-8 are
/// skipped, since they cannot be written into an include directive.
///
/// # Errors
///
/// - `BrollyError::DirectoryNotFound` if `dir` doesn't exist, isn't a
///   directory, or can't be listed.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(BrollyError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|_| BrollyError::DirectoryNotFound {
            path: dir.to_path_buf(),
        })?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Writes `content` to `path`, truncating any existing content.
///
/// The parent directory is never created; a missing parent fails the write
/// like any other IO problem.
///
/// # Errors
///
/// - `BrollyError::WriteError` if the file can't be created or written.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| BrollyError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}
