// crates/cli/src/filesystem.rs
use crate::error::{AppError, Result};
use std::fs::File;
use std::path::Path;

/// Opens a path for counting.
///
/// # Errors
///
/// [`AppError::IsDirectory`] for directories, [`AppError::Open`] when the
/// path cannot be inspected or opened.
pub fn open_source(path: &Path) -> Result<File> {
    let open_err = |source| AppError::Open {
        path: path.to_path_buf(),
        source,
    };

    let meta = std::fs::metadata(path).map_err(open_err)?;
    if meta.is_dir() {
        return Err(AppError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(open_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn opens_regular_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "abc").unwrap();
        assert!(open_source(file.path()).is_ok());
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = open_source(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::IsDirectory { .. }));
        assert!(err.to_string().ends_with(": Is a directory"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = open_source(&missing).unwrap_err();
        assert!(matches!(err, AppError::Open { .. }));
        assert!(err.to_string().starts_with(&missing.display().to_string()));
    }
}
