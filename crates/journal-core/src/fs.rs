//! Filesystem helpers for writing ledger copies atomically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Build a hidden temp path in the same directory as `destination`.
///
/// Staying in the same directory keeps the final rename on one filesystem.
/// A missing or empty parent resolves to the current directory, which is
/// created if needed.
pub fn temp_sibling(destination: &Path, prefix: &str) -> io::Result<PathBuf> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("System time error: {}", e)))?
        .as_nanos();
    Ok(parent.join(format!(".{}-{}-{}.tmp", prefix, std::process::id(), nanos)))
}

/// Move `temp_path` onto `destination`, replacing whatever is there.
///
/// `fs::rename` refuses to replace an existing file on some platforms; in
/// that case the destination is removed and the rename retried once. The
/// temp file never outlives a failed move.
///
/// # Errors
///
/// Returns an error if the rename fails even after the retry.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    let _ = fs::remove_file(destination);
    if let Err(second) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(temp_path);
        return Err(io::Error::new(
            second.kind(),
            format!("Atomic rename failed (first: {}, retry: {})", first, second),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_sibling_shares_parent() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("journal.db");

        let temp = temp_sibling(&dest, "journal-backup").unwrap();

        assert_eq!(temp.parent(), dest.parent());
        assert!(dest.parent().unwrap().is_dir());
        let name = temp.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(".journal-backup-"));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn test_rename_replaces_existing_destination() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("staged.tmp");
        let dest = dir.path().join("journal.db");

        fs::write(&dest, b"stale").unwrap();
        fs::write(&temp, b"fresh").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"fresh");
    }

    #[test]
    fn test_rename_missing_source_fails() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("never-written.tmp");
        let dest = dir.path().join("journal.db");

        assert!(rename_with_fallback(&temp, &dest).is_err());
        assert!(!dest.exists());
    }
}
