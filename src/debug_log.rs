//! Debug log file and console reporting
//!
//! The debug log is an optional append-only file shared by every invocation
//! of a callback. When it is absent, anomalies go to a [`ReportSink`]
//! instead.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Marker written when the log is opened
pub const LOG_STARTED: &str = "Logging started\n";

/// Append-only troubleshooting log
///
/// Each entry is written and flushed under one lock, so entries from
/// concurrent invocations never interleave.
#[derive(Debug)]
pub struct DebugLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl DebugLog {
    /// Open (or create) the log for appending and write the start marker
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let log = Self {
            path,
            file: Mutex::new(file),
        };
        log.append(LOG_STARTED)?;
        Ok(log)
    }

    /// Append one entry and flush it
    pub fn append(&self, entry: &str) -> io::Result<()> {
        // A poisoned lock still guards a valid file handle.
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(entry.as_bytes())?;
        file.flush()
    }

    /// Location of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Destination for reports when no debug log is configured
pub trait ReportSink: Send + Sync {
    /// Informational report, such as an unexpected daemon reply
    fn info(&self, text: &str);

    /// Error report, such as a failed connection
    fn error(&self, text: &str);
}

/// Sink writing to stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn info(&self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", text);
    }

    fn error(&self, text: &str) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_open_writes_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("callback.log");

        let log = DebugLog::open(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Logging started\n");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("callback.log");

        DebugLog::open(&path).unwrap().append("first\n").unwrap();
        DebugLog::open(&path).unwrap().append("second\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Logging started\nfirst\nLogging started\nsecond\n"
        );
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("callback.log");
        assert!(DebugLog::open(path).is_err());
    }

    #[test]
    fn test_concurrent_entries_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("callback.log");
        let log = Arc::new(DebugLog::open(&path).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    let entry = format!("{}\n", worker.to_string().repeat(2048));
                    for _ in 0..25 {
                        log.append(&entry).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().skip(1).collect();
        assert_eq!(lines.len(), 8 * 25);
        for line in lines {
            assert_eq!(line.len(), 2048);
            let first = line.chars().next().unwrap();
            assert!(line.chars().all(|c| c == first));
        }
    }
}
