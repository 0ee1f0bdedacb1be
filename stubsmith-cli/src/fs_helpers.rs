//! Filesystem helpers shared across `stubsmith` modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::CliError;

/// Reads a UTF-8 file through a capability handle on its parent directory.
pub fn read_to_string(path: &Utf8Path) -> Result<String, CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path does not name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    dir.read_to_string(file_name).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn reads_files_and_reports_missing_ones() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp dir");
        let path = root.join("schema.json");
        std::fs::write(&path, "{}").expect("write schema");

        assert_eq!(read_to_string(&path).expect("file exists"), "{}");
        let err = read_to_string(&root.join("absent.json")).expect_err("file is missing");
        assert!(matches!(err, CliError::Io { .. }));
    }
}
