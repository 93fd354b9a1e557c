//! Reference log - a human-readable dump of the generated stream.
//!
//! The [`ReferenceLog`] writes the stream once; nothing reads it back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::Result;
use crate::workload::ReferenceStream;

/// First line of every reference log.
pub const LOG_HEADER: &str = "Page Reference Sequence";

/// Writer for the reference log.
///
/// # File Layout
/// ```text
/// Page Reference Sequence
///
/// Process 1:
/// 3 0 4 4 17 2 ...
///
/// Process 2:
/// 1 1 0 9 5 88 ...
/// ```
///
/// Processes are numbered from 1, one line of space-separated pages each.
pub struct ReferenceLog<W: Write = BufWriter<File>> {
    writer: W,
}

impl ReferenceLog {
    /// Create (or truncate) the log file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReferenceLog<W> {
    /// Wrap an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the header and every process block, then flush.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying writer.
    pub fn write_stream(&mut self, stream: &ReferenceStream) -> Result<()> {
        writeln!(self.writer, "{}", LOG_HEADER)?;

        for (index, pages) in stream.processes().enumerate() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Process {}:", index + 1)?;

            let mut first = true;
            for page in pages {
                if !first {
                    write!(self.writer, " ")?;
                }
                write!(self.writer, "{}", page)?;
                first = false;
            }
            writeln!(self.writer)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write `stream` to a log file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_reference_log<P: AsRef<Path>>(path: P, stream: &ReferenceStream) -> Result<()> {
    let mut log = ReferenceLog::create(path)?;
    log.write_stream(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_layout() {
        let stream = ReferenceStream::from_processes([vec![3, 0, 4], vec![1, 1, 9]]).unwrap();

        let mut log = ReferenceLog::new(Vec::new());
        log.write_stream(&stream).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();

        assert_eq!(
            text,
            "Page Reference Sequence\n\nProcess 1:\n3 0 4\n\nProcess 2:\n1 1 9\n"
        );
    }

    #[test]
    fn test_empty_process_line() {
        let stream = ReferenceStream::new(Vec::new(), 1).unwrap();

        let mut log = ReferenceLog::new(Vec::new());
        log.write_stream(&stream).unwrap();
        let text = String::from_utf8(log.into_inner()).unwrap();

        assert_eq!(text, "Page Reference Sequence\n\nProcess 1:\n\n");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("references.txt");
        let stream = ReferenceStream::from_processes([vec![5, 6]]).unwrap();

        write_reference_log(&path, &stream).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(LOG_HEADER));
        assert!(text.contains("Process 1:\n5 6\n"));
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("references.txt");
        assert!(ReferenceLog::create(&path).is_err());
    }
}
