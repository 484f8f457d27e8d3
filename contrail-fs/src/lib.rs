//! Filesystem helpers for catalog mirrors and database artefacts, built on
//! `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};
use std::path::Component;

/// Read a whole UTF-8 file using ambient authority.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Ensure the parent directory for `path` exists.
///
/// Absolute paths are split into a root capability and a relative suffix so
/// `cap-std` can create the missing components.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_os_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

/// Whether `path` exists and is a regular file.
///
/// Missing paths and missing parents report `Ok(false)`; other I/O failures
/// propagate.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Utf8Path::new(".")
    } else {
        parent
    };
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let dir = match fs_utf8::Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    match dir.metadata(name) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Whether `path` exists and is a directory.
pub fn is_directory(path: &Utf8Path) -> io::Result<bool> {
    match fs_utf8::Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(_) => Ok(true),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// Split an absolute or relative parent path into an ambient base directory and a relative suffix.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows absolute path with a drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;

            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;

    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn tmp() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
        (dir, root)
    }

    #[rstest]
    fn creates_nested_parent_directories(#[from(tmp)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let target = root.join("db").join("staging").join("flights.sqlite");
        ensure_parent_dir(&target).expect("parent directories should be created");
        assert!(is_directory(&root.join("db").join("staging")).expect("inspect directory"));
    }

    #[rstest]
    fn reads_file_contents(#[from(tmp)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let path = root.join("airports.json");
        fs::write(path.as_std_path(), "{}").expect("write fixture");
        assert_eq!(read_utf8_file(&path).expect("read fixture"), "{}");
    }

    #[rstest]
    fn distinguishes_files_from_directories(#[from(tmp)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let path = root.join("aircraft.json");
        fs::write(path.as_std_path(), "{}").expect("write fixture");
        assert!(is_regular_file(&path).expect("inspect file"));
        assert!(!is_regular_file(&root).expect("inspect directory"));
        assert!(!is_directory(&path).expect("inspect file"));
    }

    #[rstest]
    fn missing_paths_are_neither(#[from(tmp)] (_dir, root): (TempDir, Utf8PathBuf)) {
        let missing = root.join("missing").join("flights.json");
        assert!(!is_regular_file(&missing).expect("inspect missing file"));
        assert!(!is_directory(&missing).expect("inspect missing directory"));
    }
}
