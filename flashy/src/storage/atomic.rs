//! Atomic file replacement
//!
//! Data is written to a temp file next to the target, flushed to disk,
//! then renamed over the target. Readers see either the old content or
//! the new content, never a partial write.

use crate::config::TEMP_FILE_EXTENSION;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Replace `path` with `data` in one step
pub async fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(path)?;

    let result = write_and_rename(&temp_path, path, data).await;

    if result.is_err() {
        // Leftover temp files are never listed, so a failed cleanup is harmless
        if let Err(e) = fs::remove_file(&temp_path).await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove temp file {:?}: {}", temp_path, e);
            }
        }
    }

    result
}

/// True for names produced by `write_atomic` for its temp files
pub fn is_temp_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == TEMP_FILE_EXTENSION)
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    if path.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no file name in {:?}", path),
        ));
    }

    // Fixed length regardless of the target name, so any name the
    // filesystem accepts for the target also fits its temp file
    let temp_name = format!(".{}.{}", Uuid::new_v4().simple(), TEMP_FILE_EXTENSION);

    Ok(parent_dir(path).join(temp_name))
}

async fn write_and_rename(temp_path: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(temp_path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(temp_path, path).await?;

    sync_dir(parent_dir(path)).await
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Persist the rename itself
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn dir_names(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names
    }

    #[tokio::test]
    async fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");

        write_atomic(&path, b"{}").await.unwrap();

        assert_eq!(fs::read(&path).await.unwrap(), b"{}");
    }

    #[tokio::test]
    async fn test_write_replaces_longer_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");

        write_atomic(&path, b"a much longer original document").await.unwrap();
        write_atomic(&path, b"short").await.unwrap();

        assert_eq!(fs::read(&path).await.unwrap(), b"short");
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");

        write_atomic(&path, b"one").await.unwrap();
        write_atomic(&path, b"two").await.unwrap();

        assert_eq!(dir_names(temp.path()).await, vec!["deck.json".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_old_content() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be replaced by a file rename
        let path = temp.path().join("occupied");
        fs::create_dir(&path).await.unwrap();
        fs::write(path.join("inner"), b"old").await.unwrap();

        assert!(write_atomic(&path, b"new").await.is_err());

        assert_eq!(fs::read(path.join("inner")).await.unwrap(), b"old");
        assert_eq!(dir_names(temp.path()).await, vec!["occupied".to_string()]);
    }

    #[tokio::test]
    async fn test_write_to_longest_file_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(format!("{}.json", "a".repeat(250)));

        write_atomic(&path, b"{}").await.unwrap();

        assert_eq!(fs::read(&path).await.unwrap(), b"{}");
        assert_eq!(dir_names(temp.path()).await.len(), 1);
    }

    #[test]
    fn test_temp_name_is_hidden_and_fixed_length() {
        let short = temp_path_for(Path::new("d/x.json")).unwrap();
        let long = temp_path_for(&Path::new("d").join("b".repeat(255))).unwrap();

        let short_name = short.file_name().unwrap().to_string_lossy().to_string();
        let long_name = long.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(short_name.len(), long_name.len());
        assert!(short_name.starts_with('.'));
        assert!(is_temp_file(&short_name));
        assert_eq!(short.parent(), Some(Path::new("d")));
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(".deck.json.0f3a.tmp"));
        assert!(!is_temp_file("deck.json"));
        assert!(!is_temp_file("tmp"));
    }
}
