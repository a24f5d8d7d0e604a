//! File name helpers and temporary file creation.
//!
//! Name helpers work on path strings and accept both `/` and `\` as
//! separators regardless of platform.

use std::{
    io::{Seek, SeekFrom, Write},
    path::{MAIN_SEPARATOR, Path},
};

use commons_core::{Error, Result};
use tempfile::NamedTempFile;

/// Byte position of the last path separator (`/`, `\` or the platform
/// separator) in `path`.
pub fn last_separator(path: &str) -> Option<usize> {
    path.rfind(['/', '\\', MAIN_SEPARATOR])
}

/// The last path component of `path` with its extension removed.
///
/// Only the last extension is removed (`archive.tar.gz` becomes
/// `archive.tar`), and a name consisting of a dot followed by text only
/// (`.profile`) yields the empty string.
pub fn file_name(path: &str) -> &str {
    let name = match last_separator(path) {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

/// The extension of the last path component including its dot, e.g. `.txt`.
///
/// Returns the empty string when the name has no dot, or ends with one.
pub fn file_extension(path: &str) -> &str {
    if path.trim().is_empty() {
        return "";
    }
    let Some(dot) = path.rfind('.') else {
        return "";
    };
    let after_separator = last_separator(path).is_none_or(|sep| dot > sep);
    if after_separator && dot + 1 < path.len() {
        &path[dot..]
    } else {
        ""
    }
}

/// Creates `path` together with any missing parent directories.
///
/// Returns `true` if the directory was created and `false` if it already
/// existed.
pub fn mkdirs(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)
        .map_err(|e| Error::io(format!("mkdirs {}", path.display()), e))?;
    log::debug!("created directory {}", path.display());
    Ok(true)
}

/// Writes `content` to a new temporary file named `<prefix>XXXX<suffix>`.
///
/// The returned file is positioned at its start and deleted when dropped.
pub fn create_temp_file(content: &[u8], prefix: &str, suffix: &str) -> Result<NamedTempFile> {
    let context = || format!("temp file {prefix}*{suffix}");
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile()
        .map_err(|e| Error::io(context(), e))?;
    file.write_all(content)
        .and_then(|_| file.flush())
        .and_then(|_| file.seek(SeekFrom::Start(0)))
        .map_err(|e| Error::io(context(), e))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_last_separator() {
        assert_eq!(last_separator("a/b\\c.txt"), Some(3));
        assert_eq!(last_separator("dir/file"), Some(3));
        assert_eq!(last_separator("file"), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/tmp/report.pdf"), "report");
        assert_eq!(file_name("C:\\data\\archive.tar.gz"), "archive.tar");
        assert_eq!(file_name("notes"), "notes");
        assert_eq!(file_name("dir.d/notes"), "notes");
        assert_eq!(file_name("trailing."), "trailing.");
        assert_eq!(file_name("/home/user/.profile"), "");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("/tmp/report.pdf"), ".pdf");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("dir.d/notes"), "");
        assert_eq!(file_extension("trailing."), "");
        assert_eq!(file_extension("   "), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn test_mkdirs() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        assert!(mkdirs(&nested).unwrap());
        assert!(nested.is_dir());
        assert!(!mkdirs(&nested).unwrap());
    }

    #[test]
    fn test_mkdirs_over_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = mkdirs(file.path().join("sub")).unwrap_err();
        assert!(matches!(err.kind(), commons_core::ErrorKind::Io { .. }));
    }

    #[test]
    fn test_create_temp_file() {
        let mut file = create_temp_file(b"hello", "commons-", ".txt").unwrap();
        let name = file.path().file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("commons-"));
        assert_eq!(file_extension(&name), ".txt");

        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "hello");

        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());
    }
}
