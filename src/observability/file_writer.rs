//! Size-rotated append-only file for trace output.
//!
//! Backups are numbered: `otlp.json.1` is the newest, `otlp.json.N` the
//! oldest. Rotation shifts every backup up by one and drops the one that
//! falls off the end.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past this many bytes (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Thread-safe line writer with size-based rotation.
///
/// The file is opened lazily on the first write, so construction never fails.
///
/// # Thread Safety
///
/// The open handle sits behind a `Mutex`; rotation and the write that follows
/// it happen under the same lock, so concurrent exporters never interleave
/// half-written lines or write into a file that is being renamed.
///
/// # Rotation Strategy
///
/// 1. Check the file size before each write
/// 2. If it exceeds `max_bytes`:
///    - Delete `<name>.<max_backups>`
///    - Rename `<name>.N` to `<name>.N+1`, starting from the oldest
///    - Rename `<name>` to `<name>.1`
/// 3. Open a fresh `<name>` and append the line
///
/// # Example
///
/// ```rust
/// use linedisplay::observability::file_writer::RotatingFile;
///
/// let dir = tempfile::tempdir()?;
/// let writer = RotatingFile::new(dir.path().join("otlp.json"));
/// writer.write_line("{\"resourceSpans\":[]}")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    /// Path of the live file.
    path: PathBuf,
    /// Size threshold that triggers rotation.
    max_bytes: u64,
    /// Number of numbered backups kept.
    max_backups: usize,
    /// Lazily-opened handle; `None` until the first write and after rotation.
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer with the default limits ([`DEFAULT_MAX_BYTES`],
    /// [`DEFAULT_MAX_BACKUPS`]).
    ///
    /// # Parameters
    ///
    /// * `path` - Live file path (created on first write if missing)
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    /// Creates a writer with explicit limits.
    ///
    /// # Parameters
    ///
    /// * `path` - Live file path
    /// * `max_bytes` - Rotate once the live file is larger than this
    /// * `max_backups` - Backups to keep; `0` truncates instead of renaming
    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Returns the live file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// The line is flushed before returning, so a crash right after rendering
    /// still leaves complete trace lines on disk.
    ///
    /// # Parameters
    ///
    /// * `line` - One complete JSON document (no trailing newline)
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the line is written and flushed
    /// - `Err(io::Error)` if rotation, opening, writing or flushing failed
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be rotated, opened or written, or when the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn creates_file_and_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("otlp.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(writer.path()), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let writer = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in ["first", "second", "third", "fourth"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "fourth\n");
        assert_eq!(read(&dir.path().join("otlp.json.1")), "third\n");
        assert_eq!(read(&dir.path().join("otlp.json.2")), "second\n");
        assert!(!dir.path().join("otlp.json.3").exists());
    }

    #[test]
    fn zero_backups_truncates_instead() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let writer = RotatingFile::with_limits(path.clone(), 4, 0);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(read(&path), "second\n");
        assert!(!dir.path().join("otlp.json.1").exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("nope").join("otlp.json"));
        assert!(writer.write_line("x").is_err());
    }
}
