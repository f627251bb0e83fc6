use crate::error::{IoResultExt, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting project files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir).at_path(dir)?;
    let mut tmp = NamedTempFile::new_in(dir).at_path(dir)?;
    tmp.write_all(data).at_path(path)?;
    tmp.persist(path).map_err(|e| e.error).at_path(path)?;
    Ok(())
}

/// Pretty-print `value` as JSON (two-space indent, trailing newline) and
/// write it atomically
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    atomic_write(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c.txt");
        atomic_write(&path, b"hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_atomic_write_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.txt");
        atomic_write(&path, b"one").unwrap();
        atomic_write(&path, b"two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
        // No temp files left next to the target
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_json_pretty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.json");
        write_json(&path, &serde_json::json!({"a": [1, 2]})).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"a\""));
        assert!(content.ends_with("}\n"));
    }
}
