//! Output writers for `stubsmith`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use heck::ToSnakeCase;

use crate::error::CliError;

/// Maps a class name to its file path relative to the output directory.
///
/// Namespaces become directories and names are snake cased, so
/// `Admin::LineItem` maps to `admin/line_item.rbi`.
///
/// # Errors
///
/// Returns [`CliError::InvalidModelName`] when a segment is empty or holds
/// characters other than letters, digits and underscores.
pub fn stub_path(class_name: &str) -> Result<Utf8PathBuf, CliError> {
    let mut path = Utf8PathBuf::new();
    for segment in class_name.split("::") {
        let is_valid = !segment.is_empty()
            && segment
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == '_');
        if !is_valid {
            return Err(CliError::InvalidModelName(class_name.to_owned()));
        }
        path.push(segment.to_snake_case());
    }
    path.set_extension("rbi");
    Ok(path)
}

/// Writes `text` to `relative` under `out_dir`, creating directories as
/// needed. Returns the path written.
///
/// # Errors
///
/// Returns [`CliError::Io`] when a directory or the file cannot be written.
pub fn write_stub(
    out_dir: &Utf8Path,
    relative: &Utf8Path,
    text: &str,
) -> Result<Utf8PathBuf, CliError> {
    let dir = ensure_dir(out_dir)?;
    let target = out_dir.join(relative);
    if let Some(parent) = relative.parent().filter(|parent| !parent.as_str().is_empty()) {
        dir.create_dir_all(parent).map_err(|io_err| CliError::Io {
            path: out_dir.join(parent),
            source: io_err,
        })?;
    }

    let mut file = dir
        .open_with(
            relative,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| CliError::Io {
            path: target.clone(),
            source: io_err,
        })?;
    file.write_all(text.as_bytes())
        .map_err(|io_err| CliError::Io {
            path: target.clone(),
            source: io_err,
        })?;

    Ok(target)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Widget", "widget.rbi")]
    #[case("LineItem", "line_item.rbi")]
    #[case("Admin::LineItem", "admin/line_item.rbi")]
    #[case("HTTPClient", "http_client.rbi")]
    #[case("Oauth2Token", "oauth2_token.rbi")]
    #[case("Admin::HTTPClient", "admin/http_client.rbi")]
    fn class_names_map_to_paths(#[case] class_name: &str, #[case] expected: &str) {
        assert_eq!(
            stub_path(class_name).expect("valid class name"),
            Utf8PathBuf::from(expected)
        );
    }

    #[rstest]
    #[case("")]
    #[case("Admin::")]
    #[case("../Widget")]
    fn unsafe_names_are_rejected(#[case] class_name: &str) {
        assert!(matches!(
            stub_path(class_name),
            Err(CliError::InvalidModelName(_))
        ));
    }

    #[test]
    fn write_stub_creates_namespace_directories() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp dir");
        let out_dir = root.join("sorbet/models");

        let written = write_stub(&out_dir, Utf8Path::new("admin/part.rbi"), "first\n")
            .expect("write stub");
        assert_eq!(written, out_dir.join("admin/part.rbi"));
        write_stub(&out_dir, Utf8Path::new("admin/part.rbi"), "second\n").expect("overwrite stub");
        let content = std::fs::read_to_string(&written).expect("read stub");
        assert_eq!(content, "second\n");
    }
}
