//! Source image discovery.
//!
//! Lists the files directly inside the source directory whose names match the
//! configured wildcard pattern (default `*.jp*g`). Subdirectories are not
//! descended into. Results are sorted by file name so every run visits images
//! in the same order.
//!
//! Only a failure to read the directory itself is fatal. An entry that cannot
//! be inspected (a dangling symlink, a permission error) is still returned when
//! its name matches, so the per-image step reports it as a skip; otherwise it
//! is logged and ignored.

use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("cannot read source directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Find source images in `dir` matching `pattern`.
///
/// A missing source directory yields no images rather than an error.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "source directory does not exist");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy();
                if naming::matches_pattern(pattern, &name) {
                    found.push(entry.into_path());
                }
            }
            Err(source) if source.depth() == 0 => {
                return Err(DiscoverError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                let Some(path) = err.path().map(Path::to_path_buf) else {
                    tracing::warn!(dir = %dir.display(), error = %err, "unreadable source entry");
                    continue;
                };
                let matched = path
                    .file_name()
                    .is_some_and(|n| naming::matches_pattern(pattern, &n.to_string_lossy()));
                if matched {
                    tracing::debug!(path = %path.display(), error = %err, "unreadable source entry");
                    found.push(path);
                } else {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable entry");
                }
            }
        }
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = found.len(), "discovered source images");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn finds_jpeg_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "zebra.jpg");
        touch(tmp.path(), "apple.jpeg");
        touch(tmp.path(), "mango.jpg");

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec!["apple.jpeg", "mango.jpg", "zebra.jpg"]);
    }

    #[test]
    fn ignores_non_matching_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.jpg");
        touch(tmp.path(), "logo.png");
        touch(tmp.path(), "notes.txt");

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec!["photo.jpg"]);
    }

    #[test]
    fn includes_hidden_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "photo.jpg");
        touch(tmp.path(), ".cache.jpg");

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec![".cache.jpg", "photo.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_returned_when_name_matches() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "good.jpg");
        std::os::unix::fs::symlink("/nonexistent/target.jpg", tmp.path().join("dead.jpg")).unwrap();

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec!["dead.jpg", "good.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_with_other_name_is_ignored() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "good.jpg");
        std::os::unix::fs::symlink("/nonexistent/target", tmp.path().join("stale-link")).unwrap();

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec!["good.jpg"]);
    }

    #[test]
    fn does_not_recurse_or_return_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.jpg");
        fs::create_dir(tmp.path().join("folder.jpg")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.jpg");

        let found = discover(tmp.path(), "*.jp*g").unwrap();
        assert_eq!(names(&found), vec!["top.jpg"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let found = discover(&tmp.path().join("nope"), "*.jp*g").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn custom_pattern() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "b.jpg");

        let found = discover(tmp.path(), "*.png").unwrap();
        assert_eq!(names(&found), vec!["a.png"]);
    }
}
