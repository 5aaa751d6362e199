//! Byte source selection

use crate::error::CliError;
use anyhow::Result;
use crlog_core::STDIN_NAME;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Placeholder argument meaning standard input
pub const STDIN_ARG: &str = "-";

/// Where filtered bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file opened in binary mode
    File(PathBuf),
}

impl InputSource {
    /// Interpret the positional argument; `-` selects standard input
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new(STDIN_ARG) {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    /// Label used in log lines and errors
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Size in bytes when the source is a regular file
    pub fn len_hint(&self) -> Option<u64> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => fs::metadata(path)
                .ok()
                .filter(|meta| meta.is_file())
                .map(|meta| meta.len()),
        }
    }

    /// Open the source for reading
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => {
                        anyhow::Error::new(CliError::FileNotFound(path.display().to_string()))
                    }
                    _ => anyhow::Error::new(e)
                        .context(format!("Failed to open input file: {}", path.display())),
                })?;
                log::debug!("Opened input file {}", path.display());
                Ok(Box::new(file))
            }
        }
    }

    /// Whether this source and `output` resolve to the same file
    pub fn same_file_as(&self, output: &Path) -> bool {
        match self {
            InputSource::Stdin => false,
            InputSource::File(path) => match (fs::canonicalize(path), fs::canonicalize(output)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            },
        }
    }
}
