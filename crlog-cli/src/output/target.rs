//! Byte sink selection

use anyhow::{Context, Result};
use crlog_core::STDOUT_NAME;
use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};

/// Where filtered bytes go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }

    /// Label used in log lines and errors
    pub fn name(&self) -> String {
        match self {
            OutputTarget::Stdout => STDOUT_NAME.to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }

    /// Open a buffered writer for the target
    pub fn open(&self) -> Result<OutputSink> {
        match self {
            OutputTarget::Stdout => Ok(OutputSink::Stdout(BufWriter::new(io::stdout().lock()))),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                log::debug!("Writing to {}", path.display());
                Ok(OutputSink::File(BufWriter::new(file)))
            }
        }
    }
}

/// Open, buffered sink of an [`OutputTarget`]
pub enum OutputSink {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(BufWriter<File>),
}

impl OutputSink {
    /// Flush and release the sink.
    ///
    /// A regular output file is synced so that errors the kernel defers
    /// until writeback are reported here rather than lost on drop.
    pub fn close(self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(mut writer) => writer.flush(),
            OutputSink::File(writer) => {
                let file = writer.into_inner().map_err(|e| e.into_error())?;
                if file.metadata()?.is_file() {
                    file.sync_all()?;
                }
                Ok(())
            }
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(writer) => writer.write(buf),
            OutputSink::File(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(writer) => writer.flush(),
            OutputSink::File(writer) => writer.flush(),
        }
    }
}
