use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::ScanError,
    model::{LogEntry, display_value},
};

pub const EXCEPTION_PREVIEW_CHARS: usize = 500;

pub fn format_entry(entry: &LogEntry) -> String {
    let mut out = format!("[{}] {}: {}\n", entry.timestamp, entry.level, entry.message);
    if let Some(status) = &entry.status {
        out.push_str(&format!("   Status: {}\n", display_value(status)));
    }
    if let Some(response) = &entry.response {
        out.push_str(&format!("   Response: {}\n", display_value(response)));
    }
    if let Some(exception) = &entry.exception {
        let preview: String = exception.chars().take(EXCEPTION_PREVIEW_CHARS).collect();
        out.push_str(&format!("   Exception: {preview}...\n"));
    }
    out
}

/// Receives records as the scan finds them. The file is created up front, so
/// an empty scan still leaves an empty report behind.
pub struct ReportWriter<W: Write> {
    inner: W,
}

impl ReportWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, ScanError> {
        let file = File::create(path).map_err(|source| write_error(path, source))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
        self.inner.write_all(format_entry(entry).as_bytes())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

pub fn write_error(path: &Path, source: io::Error) -> ScanError {
    ScanError::Write {
        path: PathBuf::from(path),
        source,
    }
}
