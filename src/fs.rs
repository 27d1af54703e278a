//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives in the same directory as the target so the rename
/// stays on one filesystem. Readers see either the old file or the complete
/// new one, and a failed write removes the temp file again.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let temp_path = temp_path_for(path);

    let result = fs::write(&temp_path, content.as_ref())
        .with_context(|| format!("Failed to write {}", temp_path.display()))
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .with_context(|| format!("Failed to replace {}", path.display()))
        });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{file_name}.tmp"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        atomic_write(&file_path, "Hello, World!").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, "Original content").unwrap();
        atomic_write(&file_path, "New content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "New content");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        atomic_write(&file_path, "content").unwrap();

        let temp_path = temp_dir.path().join(".test.txt.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_atomic_write_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("doc.docx");

        let bytes = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];
        atomic_write(&file_path, &bytes).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), bytes);
    }

    #[test]
    fn test_atomic_write_failure_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails.
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inner.txt"), "keep").unwrap();

        assert!(atomic_write(&target, "new").is_err());
        assert!(target.is_dir());
        assert!(!temp_dir.path().join(".occupied.tmp").exists());
    }

    #[test]
    fn test_temp_path_for_bare_file_name() {
        assert_eq!(
            temp_path_for(Path::new("out.txt")),
            PathBuf::from("./.out.txt.tmp")
        );
    }
}
